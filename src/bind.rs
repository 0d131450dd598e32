use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::parser::Parser;
use crate::reply::Reply;

/// Reconcile the outcome of a second parser with what the first one left
/// behind.
///
/// `first` is the expected discriminator of the first parser's success:
/// `None` when it consumed input, `Some(labels)` when it was epsilon.
/// Consumption dominates: once the first parser consumed, the combined
/// outcome is consumed no matter what the second did, and pending labels
/// are dropped. When both sides are epsilon their label sets are unioned,
/// so an error after a zero-width parse still names everything that could
/// have continued it.
pub(crate) fn sequence<'src, T>(
    first: Option<Expected>,
    second: Reply<'src, T>,
) -> Reply<'src, T> {
    match first {
        None => match second {
            Reply::Ok { value, cursor, .. } => Reply::Ok {
                value,
                cursor,
                expected: None,
            },
            Reply::Err { message, .. } => Reply::Err {
                message,
                consumed: true,
            },
        },
        Some(labels) => match second {
            Reply::Ok {
                value,
                cursor,
                expected: None,
            } => Reply::Ok {
                value,
                cursor,
                expected: None,
            },
            Reply::Ok {
                value,
                cursor,
                expected: Some(more),
            } => Reply::Ok {
                value,
                cursor,
                expected: Some(labels.append(more)),
            },
            Reply::Err {
                mut message,
                consumed: false,
            } => {
                message.prepend_expected(labels);
                Reply::Err {
                    message,
                    consumed: false,
                }
            }
            err @ Reply::Err { consumed: true, .. } => err,
        },
    }
}

/// Monadic sequencing: run a parser, then run the parser produced from its
/// value.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'src, P, F, Q> Parser<'src> for Bind<P, F>
where
    P: Parser<'src>,
    Q: Parser<'src>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Reply::Ok {
                value,
                cursor: mid,
                expected,
            } => {
                let next = (self.binder)(value);
                sequence(expected, next.parse(mid))
            }
            Reply::Err { message, consumed } => Reply::Err { message, consumed },
        }
    }
}

/// Convenience function to create a Bind parser.
pub fn bind<'src, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'src>,
    Q: Parser<'src>,
    F: Fn(P::Output) -> Q,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .and_then() method support for parsers.
pub trait BindExt<'src>: Parser<'src> + Sized {
    fn and_then<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        Q: Parser<'src>,
        F: Fn(Self::Output) -> Q,
    {
        Bind::new(self, binder)
    }
}

impl<'src, P> BindExt<'src> for P where P: Parser<'src> {}
