use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;

/// Parser that consumes one character matching a predicate.
///
/// On a match the cursor advances past the character. On a mismatch or at
/// the end of input nothing is consumed and the failure carries this
/// parser's expected labels (empty for a bare `satisfy`; the named
/// character-class constructors below fill it in).
pub struct Satisfy<F> {
    predicate: F,
    expected: Expected,
}

impl<F> Satisfy<F> {
    fn new(predicate: F, expected: Expected) -> Self {
        Satisfy {
            predicate,
            expected,
        }
    }
}

impl<'src, F> Parser<'src> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match cursor.curr() {
            Err(_) => Reply::err_eps(
                Message::end_of_input(cursor).with_expected(self.expected.clone()),
            ),
            Ok(c) if (self.predicate)(c) => Reply::consumed_ok(c, cursor.next()),
            Ok(c) => Reply::err_eps(
                Message::unexpected_char(cursor, c).with_expected(self.expected.clone()),
            ),
        }
    }
}

/// Parser for a single character satisfying `predicate`.
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, Expected::empty())
}

/// Parser that consumes any single character.
pub fn any_char() -> Satisfy<fn(char) -> bool> {
    let always: fn(char) -> bool = |_| true;
    Satisfy::new(always, Expected::empty())
}

/// Parser for a Unicode letter.
pub fn letter() -> Satisfy<fn(char) -> bool> {
    let alphabetic: fn(char) -> bool = |c| c.is_alphabetic();
    Satisfy::new(alphabetic, Expected::label("letter"))
}

/// Parser for an ASCII digit.
pub fn digit() -> Satisfy<fn(char) -> bool> {
    let is_digit: fn(char) -> bool = |c| c.is_ascii_digit();
    Satisfy::new(is_digit, Expected::label("digit"))
}

/// Parser for an uppercase letter.
pub fn uppercase() -> Satisfy<fn(char) -> bool> {
    let upper: fn(char) -> bool = |c| c.is_uppercase();
    Satisfy::new(upper, Expected::label("uppercase letter"))
}

/// Parser for a lowercase letter.
pub fn lowercase() -> Satisfy<fn(char) -> bool> {
    let lower: fn(char) -> bool = |c| c.is_lowercase();
    Satisfy::new(lower, Expected::label("lowercase letter"))
}

/// Parser that matches one specific character.
pub struct IsChar {
    wanted: char,
    expected: Expected,
}

impl<'src> Parser<'src> for IsChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match cursor.curr() {
            Err(_) => Reply::err_eps(
                Message::end_of_input(cursor).with_expected(self.expected.clone()),
            ),
            Ok(c) if c == self.wanted => Reply::consumed_ok(c, cursor.next()),
            Ok(c) => Reply::err_eps(
                Message::unexpected_char(cursor, c).with_expected(self.expected.clone()),
            ),
        }
    }
}

/// Parser for exactly the character `wanted`.
pub fn is_char(wanted: char) -> IsChar {
    IsChar {
        wanted,
        expected: Expected::label(format!("'{}'", wanted.escape_debug())),
    }
}
