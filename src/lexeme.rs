use crate::bind::sequence;
use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::take::{take_while, take_while1};

/// Parser that skips zero or more Unicode whitespace characters, yielding
/// the skipped slice. Never fails.
pub struct Whitespace;

impl<'src> Parser<'src> for Whitespace {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        take_while(char::is_whitespace).parse(cursor)
    }
}

pub fn whitespace() -> Whitespace {
    Whitespace
}

/// Parser combinator that runs a parser and then skips trailing
/// whitespace, keeping the parser's value.
pub struct Lexeme<P> {
    parser: P,
}

impl<'src, P> Parser<'src> for Lexeme<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Reply::Ok {
                value,
                cursor: mid,
                expected,
            } => sequence(expected, whitespace().parse(mid).map(|_| value)),
            err => err,
        }
    }
}

/// Convenience function to create a Lexeme parser.
pub fn lexeme<'src, P>(parser: P) -> Lexeme<P>
where
    P: Parser<'src>,
{
    Lexeme { parser }
}

/// Parser for an unsigned decimal numeral: one or more ASCII digits.
///
/// A numeral that does not fit in a `u64` is a committed error at the
/// start of the numeral.
pub struct Num;

impl<'src> Parser<'src> for Num {
    type Output = u64;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match take_while1(|c: char| c.is_ascii_digit()).parse(cursor) {
            Reply::Err { mut message, consumed } => {
                message.set_expected(Expected::label("digit"));
                Reply::Err { message, consumed }
            }
            Reply::Ok {
                value: digits,
                cursor: end,
                ..
            } => match digits.parse::<u64>() {
                Ok(value) => Reply::consumed_ok(value, end),
                Err(_) => Reply::err_consumed(
                    Message::new(cursor, format!("number too large: {}", digits)),
                ),
            },
        }
    }
}

pub fn num() -> Num {
    Num
}
