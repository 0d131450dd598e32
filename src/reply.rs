use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::message::Message;

/// Outcome of running a parser: success or failure, crossed with whether
/// input was consumed.
///
/// The four observable cases are encoded as a two-variant tag plus a
/// discriminator. On the `Ok` side the expected set is `Some` exactly when
/// the parse consumed nothing (an epsilon success); a success that moved
/// the cursor carries `None`, because consuming commits to a parse and
/// pending labels no longer apply. On the `Err` side the `consumed` flag
/// distinguishes a recoverable epsilon failure from a committed one.
///
/// Every combinator in the crate preserves this discipline:
/// - an epsilon success leaves the cursor where it started;
/// - a consuming success moves the cursor strictly forward;
/// - the expected set of an epsilon success records the labels that would
///   have been reported had the parse not succeeded, which is what lets
///   alternation blame both branches;
/// - only epsilon failures are recoverable by alternation.
#[derive(Clone, Debug)]
pub enum Reply<'src, T> {
    Ok {
        value: T,
        cursor: Cursor<'src>,
        expected: Option<Expected>,
    },
    Err {
        message: Message<'src>,
        consumed: bool,
    },
}

impl<'src, T> Reply<'src, T> {
    /// Epsilon success with an empty expected set.
    pub fn eps(value: T, cursor: Cursor<'src>) -> Self {
        Reply::Ok {
            value,
            cursor,
            expected: Some(Expected::empty()),
        }
    }

    /// Epsilon success carrying accumulated labels.
    pub fn eps_with(value: T, cursor: Cursor<'src>, expected: Expected) -> Self {
        Reply::Ok {
            value,
            cursor,
            expected: Some(expected),
        }
    }

    /// Success that consumed input.
    pub fn consumed_ok(value: T, cursor: Cursor<'src>) -> Self {
        Reply::Ok {
            value,
            cursor,
            expected: None,
        }
    }

    /// Failure that consumed nothing; recoverable by alternation.
    pub fn err_eps(message: Message<'src>) -> Self {
        Reply::Err {
            message,
            consumed: false,
        }
    }

    /// Failure after consuming input; not recoverable by plain alternation.
    pub fn err_consumed(message: Message<'src>) -> Self {
        Reply::Err {
            message,
            consumed: true,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::Ok { .. })
    }

    /// Whether this outcome consumed input, successful or not.
    pub fn is_consumed(&self) -> bool {
        match self {
            Reply::Ok { expected, .. } => expected.is_none(),
            Reply::Err { consumed, .. } => *consumed,
        }
    }

    /// Transform the carried value, preserving the outcome shape.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<'src, U> {
        match self {
            Reply::Ok {
                value,
                cursor,
                expected,
            } => Reply::Ok {
                value: f(value),
                cursor,
                expected,
            },
            Reply::Err { message, consumed } => Reply::Err { message, consumed },
        }
    }

    /// Demote a consumed failure to an epsilon failure; everything else
    /// passes through. This is the whole of `attempt`.
    pub fn recover(self) -> Self {
        match self {
            Reply::Err {
                message,
                consumed: true,
            } => Reply::Err {
                message,
                consumed: false,
            },
            other => other,
        }
    }
}
