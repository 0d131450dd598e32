use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;
use std::borrow::Cow;

/// Parser that matches an exact string, character by character.
///
/// All-or-nothing: on any mismatch or premature end of input the failure
/// consumes nothing and the reported cursor is the *starting* cursor, even
/// when several characters already matched. Committing mid-word would
/// silently break alternations like `is_string("let").or(is_string("letter"))`.
pub struct IsString {
    wanted: Cow<'static, str>,
    expected: Expected,
}

impl<'src> Parser<'src> for IsString {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        let mut scratch = cursor;

        for wanted_char in self.wanted.chars() {
            match scratch.curr() {
                Ok(c) if c == wanted_char => scratch = scratch.next(),
                Ok(c) => {
                    return Reply::err_eps(
                        Message::unexpected_char(cursor, c).with_expected(self.expected.clone()),
                    );
                }
                Err(_) => {
                    return Reply::err_eps(
                        Message::end_of_input(cursor).with_expected(self.expected.clone()),
                    );
                }
            }
        }

        let matched = &cursor.source()[cursor.offset()..scratch.offset()];
        if matched.is_empty() {
            Reply::eps(matched, cursor)
        } else {
            Reply::consumed_ok(matched, scratch)
        }
    }
}

/// Parser for exactly the string `wanted`, yielding the matched slice of
/// the input.
pub fn is_string(wanted: impl Into<Cow<'static, str>>) -> IsString {
    let wanted = wanted.into();
    let expected = Expected::label(format!("{:?}", wanted));
    IsString { wanted, expected }
}
