use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::parser::Parser;
use crate::reply::Reply;

// Each round after the first element parses `separator` then `element` as
// one step, under the same reconciliation as `bind`: a step whose
// separator consumed before the element failed is a committed error (a
// trailing separator is a syntax error, not the end of the list). The loop
// is fuel-bounded like `many`.

fn finish<'src, T>(
    values: Vec<T>,
    cursor: Cursor<'src>,
    consumed: bool,
    pending: Expected,
) -> Reply<'src, Vec<T>> {
    if consumed {
        Reply::consumed_ok(values, cursor)
    } else {
        Reply::eps_with(values, cursor, pending)
    }
}

fn repeat_sep1<'src, P, S>(
    parser: &P,
    separator: &S,
    start: Cursor<'src>,
) -> Reply<'src, Vec<P::Output>>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    let mut values = Vec::new();

    let (mut cursor, mut consumed, mut pending) = match parser.parse(start) {
        Reply::Ok {
            value,
            cursor,
            expected,
        } => {
            values.push(value);
            let consumed = expected.is_none();
            (cursor, consumed, expected.unwrap_or_default())
        }
        Reply::Err { message, consumed } => return Reply::Err { message, consumed },
    };

    let mut fuel = start.remaining();
    while fuel > 0 {
        fuel -= 1;

        let (mid, sep_expected) = match separator.parse(cursor) {
            Reply::Ok {
                cursor: mid,
                expected,
                ..
            } => (mid, expected),
            Reply::Err {
                message,
                consumed: true,
            } => return Reply::err_consumed(message),
            Reply::Err {
                message,
                consumed: false,
            } => {
                return finish(values, cursor, consumed, pending.append(message.into_expected()));
            }
        };
        let sep_consumed = sep_expected.is_none();

        match parser.parse(mid) {
            Reply::Ok {
                value,
                cursor: next,
                expected,
            } => {
                values.push(value);
                cursor = next;
                if sep_consumed || expected.is_none() {
                    consumed = true;
                } else if !consumed {
                    let step = sep_expected
                        .unwrap_or_default()
                        .append(expected.unwrap_or_default());
                    pending = pending.append(step);
                }
            }
            Reply::Err {
                message,
                consumed: element_consumed,
            } => {
                if element_consumed || sep_consumed {
                    return Reply::err_consumed(message);
                }
                let step = sep_expected
                    .unwrap_or_default()
                    .append(message.into_expected());
                return finish(values, cursor, consumed, pending.append(step));
            }
        }
    }

    finish(values, cursor, consumed, pending)
}

/// Parser combinator that matches one or more occurrences of `parser`
/// separated by `separator`, keeping only the element values.
///
/// A trailing separator is an error: once a separator consumed, the next
/// element must follow.
pub struct SepBy1<P, S> {
    parser: P,
    separator: S,
}

impl<'src, P, S> Parser<'src> for SepBy1<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        repeat_sep1(&self.parser, &self.separator, cursor)
    }
}

/// Convenience function to create a SepBy1 parser.
pub fn sep_by1<'src, P, S>(parser: P, separator: S) -> SepBy1<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    SepBy1 { parser, separator }
}

/// Parser combinator that matches zero or more occurrences of `parser`
/// separated by `separator`.
pub struct SepBy<P, S> {
    parser: P,
    separator: S,
}

impl<'src, P, S> Parser<'src> for SepBy<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match repeat_sep1(&self.parser, &self.separator, cursor) {
            Reply::Err {
                message,
                consumed: false,
            } => Reply::eps_with(Vec::new(), cursor, message.into_expected()),
            reply => reply,
        }
    }
}

/// Convenience function to create a SepBy parser.
pub fn sep_by<'src, P, S>(parser: P, separator: S) -> SepBy<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    SepBy { parser, separator }
}
