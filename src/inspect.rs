//! Non-consuming views of the cursor: every parser here is an epsilon
//! success (or an epsilon failure) and leaves the input untouched.

use crate::cursor::{Cursor, Position};
use crate::expected::Expected;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;

/// Parser that peeks at the current character without consuming it.
pub struct Curr;

impl<'src> Parser<'src> for Curr {
    type Output = char;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match cursor.curr() {
            Ok(c) => Reply::eps(c, cursor),
            Err(_) => Reply::err_eps(Message::end_of_input(cursor)),
        }
    }
}

pub fn curr() -> Curr {
    Curr
}

/// Parser that yields the input remaining from the current position.
pub struct LeftOver;

impl<'src> Parser<'src> for LeftOver {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        Reply::eps(cursor.rest(), cursor)
    }
}

pub fn left_over() -> LeftOver {
    LeftOver
}

/// Parser that yields the current line and column.
pub struct Pos;

impl<'src> Parser<'src> for Pos {
    type Output = Position;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        Reply::eps(cursor.position(), cursor)
    }
}

pub fn pos() -> Pos {
    Pos
}

/// Parser that yields the number of characters left in the input.
pub struct Remaining;

impl<'src> Parser<'src> for Remaining {
    type Output = usize;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        Reply::eps(cursor.remaining(), cursor)
    }
}

pub fn remaining() -> Remaining {
    Remaining
}

/// Parser that checks at least `count` characters remain, consuming none.
pub struct Ensure {
    count: usize,
}

impl<'src> Parser<'src> for Ensure {
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        if cursor.remaining() >= self.count {
            Reply::eps((), cursor)
        } else {
            Reply::err_eps(Message::end_of_input(cursor))
        }
    }
}

pub fn ensure(count: usize) -> Ensure {
    Ensure { count }
}

/// Parser that succeeds only at the end of input.
pub struct Eoi;

impl<'src> Parser<'src> for Eoi {
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match cursor.curr() {
            Err(_) => Reply::eps((), cursor),
            Ok(c) => Reply::err_eps(
                Message::unexpected_char(cursor, c)
                    .with_expected(Expected::label("end of input")),
            ),
        }
    }
}

pub fn eoi() -> Eoi {
    Eoi
}
