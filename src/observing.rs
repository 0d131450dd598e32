use crate::cursor::Cursor;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;

/// Parser combinator that reifies failure as a value.
///
/// The output becomes `Result<T, Message>`: a success wraps its value in
/// `Ok` with its consumption intact; a failure becomes a *success*
/// carrying the message in `Err`. An epsilon failure turns into an epsilon
/// success that keeps the failure's expected labels, so an enclosing
/// alternation still blames this branch; a consumed failure turns into a
/// consuming success that resumes at the failure cursor. This combinator
/// itself never fails.
pub struct Observing<P> {
    parser: P,
}

impl<P> Observing<P> {
    pub fn new(parser: P) -> Self {
        Observing { parser }
    }
}

impl<'src, P> Parser<'src> for Observing<P>
where
    P: Parser<'src>,
{
    type Output = Result<P::Output, Message<'src>>;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Reply::Ok {
                value,
                cursor: end,
                expected,
            } => Reply::Ok {
                value: Ok(value),
                cursor: end,
                expected,
            },
            Reply::Err {
                message,
                consumed: false,
            } => {
                let labels = message.expected().clone();
                Reply::eps_with(Err(message), cursor, labels)
            }
            Reply::Err {
                message,
                consumed: true,
            } => {
                let resume = message.cursor();
                Reply::consumed_ok(Err(message), resume)
            }
        }
    }
}

/// Convenience function to create an Observing parser.
pub fn observing<'src, P>(parser: P) -> Observing<P>
where
    P: Parser<'src>,
{
    Observing::new(parser)
}
