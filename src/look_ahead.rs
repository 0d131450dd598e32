use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::reply::Reply;

/// Parser combinator that runs a parser and rewinds on success.
///
/// A success of either kind becomes an epsilon success at the *original*
/// cursor with an empty expected set. Failures pass through unchanged;
/// wrap the inner parser in `attempt` to make a consumed failure
/// recoverable too.
pub struct LookAhead<P> {
    parser: P,
}

impl<P> LookAhead<P> {
    pub fn new(parser: P) -> Self {
        LookAhead { parser }
    }
}

impl<'src, P> Parser<'src> for LookAhead<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Reply::Ok { value, .. } => Reply::eps(value, cursor),
            err => err,
        }
    }
}

/// Convenience function to create a LookAhead parser.
pub fn look_ahead<'src, P>(parser: P) -> LookAhead<P>
where
    P: Parser<'src>,
{
    LookAhead::new(parser)
}
