use crate::cursor::Cursor;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;
use std::borrow::Cow;

/// Parser that always succeeds with a copy of the given value, consuming
/// nothing.
pub struct Pure<T>(T);

impl<'src, T: Clone> Parser<'src> for Pure<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        Reply::eps(self.0.clone(), cursor)
    }
}

pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure(value)
}

/// Parser that always fails without consuming input.
pub struct Failure;

impl<'src> Parser<'src> for Failure {
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        Reply::err_eps(Message::new(cursor, "failure"))
    }
}

pub fn failure() -> Failure {
    Failure
}

/// Parser that fails without consuming, reporting the given text as what
/// was (unexpectedly) seen.
pub struct Unexpected {
    text: Cow<'static, str>,
}

impl<'src> Parser<'src> for Unexpected {
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        Reply::err_eps(Message::new(cursor, self.text.clone()))
    }
}

pub fn unexpected(text: impl Into<Cow<'static, str>>) -> Unexpected {
    Unexpected { text: text.into() }
}

/// General-purpose user-raised failure; same shape as [`unexpected`].
pub fn fail(text: impl Into<Cow<'static, str>>) -> Unexpected {
    unexpected(text)
}

/// Like [`unexpected`], but the message sits at a caller-captured cursor
/// rather than the current one.
pub struct UnexpectedAt<'src> {
    text: Cow<'static, str>,
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> for UnexpectedAt<'src> {
    type Output = ();

    fn parse(&self, _cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        Reply::err_eps(Message::new(self.cursor, self.text.clone()))
    }
}

pub fn unexpected_at(text: impl Into<Cow<'static, str>>, cursor: Cursor<'_>) -> UnexpectedAt<'_> {
    UnexpectedAt {
        text: text.into(),
        cursor,
    }
}
