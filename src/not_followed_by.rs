use crate::cursor::Cursor;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;
use std::borrow::Cow;

/// Parser combinator for negative lookahead.
///
/// Succeeds with `()` when the given parser would fail at the current
/// position; fails with the given description when it would succeed.
/// Never consumes input either way.
pub struct NotFollowedBy<P> {
    parser: P,
    description: Cow<'static, str>,
}

impl<'src, P> Parser<'src> for NotFollowedBy<P>
where
    P: Parser<'src>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Reply::Ok { .. } => {
                Reply::err_eps(Message::new(cursor, self.description.clone()))
            }
            Reply::Err { .. } => Reply::eps((), cursor),
        }
    }
}

/// Convenience function to create a NotFollowedBy parser.
pub fn not_followed_by<'src, P>(
    parser: P,
    description: impl Into<Cow<'static, str>>,
) -> NotFollowedBy<P>
where
    P: Parser<'src>,
{
    NotFollowedBy {
        parser,
        description: description.into(),
    }
}
