use crate::cursor::Cursor;
use crate::reply::Reply;

/// Core parser trait.
///
/// A parser is a value: running it against a cursor is a read-only
/// traversal of the input that produces a [`Reply`]. Parsers share no
/// mutable state and may be run any number of times from any position.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given cursor position.
    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output>;
}

impl<'src, P: Parser<'src> + ?Sized> Parser<'src> for &P {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'src, P: Parser<'src> + ?Sized> Parser<'src> for Box<P> {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        (**self).parse(cursor)
    }
}

// Deeply chained combinators nest their concrete types; recursive and
// n-way constructions (`fix`, `longest_match`) would not be expressible at
// all without flattening the type. Boxing trades one allocation and a
// virtual call per combinator for a single flat type.

/// The erased parser type used wherever parsers must be stored uniformly.
pub type BoxedParser<'src, T> = Box<dyn Parser<'src, Output = T> + 'src>;

/// Erase a parser's concrete type.
pub fn boxed<'src, P>(parser: P) -> BoxedParser<'src, P::Output>
where
    P: Parser<'src> + 'src,
{
    Box::new(parser)
}

/// A parser built directly from a function over cursors.
pub struct FnParser<F>(F);

impl<'src, F, T> Parser<'src> for FnParser<F>
where
    F: Fn(Cursor<'src>) -> Reply<'src, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        (self.0)(cursor)
    }
}

/// Wrap a plain function as a parser.
pub fn from_fn<'src, F, T>(run: F) -> FnParser<F>
where
    F: Fn(Cursor<'src>) -> Reply<'src, T>,
{
    FnParser(run)
}
