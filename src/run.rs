//! Run entry points: feed a string to a parser and get a value or a
//! [`Message`] back. Parse errors are returned, never thrown; the host's
//! panic/exception machinery is not involved.

use crate::bind::sequence;
use crate::cursor::Cursor;
use crate::inspect::eoi;
use crate::message::Message;
use crate::parser::Parser;
use crate::reply::Reply;

/// Run a parser against an input string.
pub fn parse<'src, P>(parser: &P, input: &'src str) -> Result<P::Output, Message<'src>>
where
    P: Parser<'src>,
{
    match parser.parse(Cursor::new(input)) {
        Reply::Ok { value, .. } => Ok(value),
        Reply::Err { message, .. } => Err(message),
    }
}

/// Run a parser and require it to consume the whole input.
pub fn parse_with_eoi<'src, P>(parser: &P, input: &'src str) -> Result<P::Output, Message<'src>>
where
    P: Parser<'src>,
{
    match parser.parse(Cursor::new(input)) {
        Reply::Ok {
            value,
            cursor,
            expected,
        } => match sequence(expected, eoi().parse(cursor).map(|_| value)) {
            Reply::Ok { value, .. } => Ok(value),
            Reply::Err { message, .. } => Err(message),
        },
        Reply::Err { message, .. } => Err(message),
    }
}

/// Run a parser and also return the cursor where it stopped.
pub fn parse_with_left_over<'src, P>(
    parser: &P,
    input: &'src str,
) -> Result<(P::Output, Cursor<'src>), Message<'src>>
where
    P: Parser<'src>,
{
    match parser.parse(Cursor::new(input)) {
        Reply::Ok { value, cursor, .. } => Ok((value, cursor)),
        Reply::Err { message, .. } => Err(message),
    }
}
