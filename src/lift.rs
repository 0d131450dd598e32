//! Embedding parsers into an ambient effect.
//!
//! The combinator layer itself is pure, but a host may want to wrap
//! parsers in additional context (state, tracing, an environment) and
//! still use the reply-rewriting combinators. Two capabilities suffice:
//! `lift` embeds a pure parse function into the effect, and `map_reply`
//! rewrites the reply of a hosted parser while preserving the effect's
//! outer structure. Any wrapper providing both inherits `attempt`,
//! `label` and `hidden` below unchanged.

use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::label::apply_label;
use crate::parser::{from_fn, BoxedParser, Parser};
use crate::reply::Reply;
use std::borrow::Cow;

/// Capability pair required of an effect that hosts parsers.
pub trait Effect<'src> {
    /// The effect's rendering of a parser producing `T`.
    type Hosted<T: 'src>;

    /// Embed a pure parse function into the effect.
    fn lift<T, F>(run: F) -> Self::Hosted<T>
    where
        T: 'src,
        F: Fn(Cursor<'src>) -> Reply<'src, T> + 'src;

    /// Rewrite every reply of a hosted parser, keeping the effect's
    /// structure intact.
    fn map_reply<T, F>(hosted: Self::Hosted<T>, rewrite: F) -> Self::Hosted<T>
    where
        T: 'src,
        F: Fn(Reply<'src, T>) -> Reply<'src, T> + 'src;
}

/// The identity effect: hosted parsers are plain boxed parsers.
pub struct Direct;

impl<'src> Effect<'src> for Direct {
    type Hosted<T: 'src> = BoxedParser<'src, T>;

    fn lift<T, F>(run: F) -> Self::Hosted<T>
    where
        T: 'src,
        F: Fn(Cursor<'src>) -> Reply<'src, T> + 'src,
    {
        Box::new(from_fn(run))
    }

    fn map_reply<T, F>(hosted: Self::Hosted<T>, rewrite: F) -> Self::Hosted<T>
    where
        T: 'src,
        F: Fn(Reply<'src, T>) -> Reply<'src, T> + 'src,
    {
        Box::new(from_fn(move |cursor| rewrite(hosted.parse(cursor))))
    }
}

/// Host an ordinary parser in an effect.
pub fn lift_parser<'src, M, P>(parser: P) -> M::Hosted<P::Output>
where
    M: Effect<'src>,
    P: Parser<'src> + 'src,
    P::Output: 'src,
{
    M::lift(move |cursor| parser.parse(cursor))
}

/// `attempt` over any effect.
pub fn attempt_in<'src, M, T>(hosted: M::Hosted<T>) -> M::Hosted<T>
where
    M: Effect<'src>,
    T: 'src,
{
    M::map_reply(hosted, Reply::recover)
}

/// `label` over any effect.
pub fn label_in<'src, M, T>(
    hosted: M::Hosted<T>,
    text: impl Into<Cow<'static, str>>,
) -> M::Hosted<T>
where
    M: Effect<'src>,
    T: 'src,
{
    let labels = Expected::label(text);
    M::map_reply(hosted, move |reply| apply_label(reply, &labels))
}

/// `hidden` over any effect.
pub fn hidden_in<'src, M, T>(hosted: M::Hosted<T>) -> M::Hosted<T>
where
    M: Effect<'src>,
    T: 'src,
{
    let labels = Expected::empty();
    M::map_reply(hosted, move |reply| apply_label(reply, &labels))
}
