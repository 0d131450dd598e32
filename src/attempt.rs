use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::reply::Reply;

/// Parser combinator that makes failure all-or-nothing.
///
/// A consumed failure of the inner parser is demoted to an epsilon
/// failure, so an enclosing alternation can still try its other branch.
/// Successes pass through untouched; in particular a consuming success
/// stays consuming.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'src, P> Parser<'src> for Attempt<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        self.parser.parse(cursor).recover()
    }
}

/// Convenience function to create an Attempt parser.
pub fn attempt<'src, P>(parser: P) -> Attempt<P>
where
    P: Parser<'src>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers.
pub trait AttemptExt<'src>: Parser<'src> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

impl<'src, P> AttemptExt<'src> for P where P: Parser<'src> {}
