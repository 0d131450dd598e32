use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::parser::Parser;
use crate::reply::Reply;
use std::borrow::Cow;

/// Rewrite the expected set of an epsilon outcome.
///
/// Consumed outcomes pass through unchanged: once input was consumed the
/// parse has committed to a specific production and relabelling it would
/// mislead.
pub(crate) fn apply_label<'src, T>(reply: Reply<'src, T>, labels: &Expected) -> Reply<'src, T> {
    match reply {
        Reply::Ok {
            value,
            cursor,
            expected: Some(_),
        } => Reply::Ok {
            value,
            cursor,
            expected: Some(labels.clone()),
        },
        Reply::Err {
            mut message,
            consumed: false,
        } => {
            message.set_expected(labels.clone());
            Reply::Err {
                message,
                consumed: false,
            }
        }
        committed => committed,
    }
}

/// Parser combinator that names the production a parser recognizes.
///
/// Failure messages (and epsilon successes) report the given labels
/// instead of whatever the inner parser accumulated.
pub struct Label<P> {
    parser: P,
    labels: Expected,
}

impl<'src, P> Parser<'src> for Label<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Reply<'src, Self::Output> {
        apply_label(self.parser.parse(cursor), &self.labels)
    }
}

/// Name a parser's production with a single label (the `<?>` of the
/// Parsec lineage).
pub fn label<'src, P>(parser: P, text: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'src>,
{
    Label {
        parser,
        labels: Expected::label(text),
    }
}

/// Name a parser's production with several labels at once.
pub fn labels<'src, P, I>(parser: P, texts: I) -> Label<P>
where
    P: Parser<'src>,
    I: IntoIterator,
    I::Item: Into<Cow<'static, str>>,
{
    Label {
        parser,
        labels: Expected::from_labels(texts),
    }
}

/// Erase a parser's expected labels entirely.
pub fn hidden<'src, P>(parser: P) -> Label<P>
where
    P: Parser<'src>,
{
    Label {
        parser,
        labels: Expected::empty(),
    }
}

/// Extension trait to add .label() method support for parsers.
pub trait LabelExt<'src>: Parser<'src> + Sized {
    fn label(self, text: impl Into<Cow<'static, str>>) -> Label<Self> {
        label(self, text)
    }
}

impl<'src, P> LabelExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::pure::pure;
    use crate::satisfy::is_char;

    #[test]
    fn test_label_replaces_expected_on_epsilon_failure() {
        let parser = label(is_char('a'), "the letter a");
        match parser.parse(Cursor::new("z")) {
            Reply::Err { message, consumed } => {
                assert!(!consumed);
                assert_eq!(message.expected().labels(), vec!["the letter a"]);
            }
            _ => panic!("label succeeded on a mismatch"),
        }
    }

    #[test]
    fn test_label_replaces_expected_on_epsilon_success() {
        let parser = pure(()).label("nothing at all");
        match parser.parse(Cursor::new("x")) {
            Reply::Ok { expected, .. } => {
                let expected = expected.expect("pure must stay epsilon");
                assert_eq!(expected.labels(), vec!["nothing at all"]);
            }
            _ => panic!("label broke pure"),
        }
    }

    #[test]
    fn test_label_leaves_consumed_failure_alone() {
        let parser = is_char('a').and(is_char('b')).label("ab pair");
        match parser.parse(Cursor::new("ax")) {
            Reply::Err { message, consumed } => {
                assert!(consumed);
                // committed parse: the original labels stand
                assert_eq!(message.expected().labels(), vec!["'b'"]);
            }
            _ => panic!("label succeeded on a mismatch"),
        }
    }

    #[test]
    fn test_label_leaves_consuming_success_alone() {
        let parser = is_char('a').label("A");
        match parser.parse(Cursor::new("ab")) {
            Reply::Ok { cursor, expected, .. } => {
                assert_eq!(cursor.offset(), 1);
                assert!(expected.is_none());
            }
            _ => panic!("label broke a match"),
        }
    }

    #[test]
    fn test_labels_reports_all() {
        let parser = labels(is_char('a'), ["A", "start of word"]);
        match parser.parse(Cursor::new("z")) {
            Reply::Err { message, .. } => {
                assert_eq!(message.expected().render().unwrap(), "A or start of word");
            }
            _ => panic!("labels succeeded on a mismatch"),
        }
    }

    #[test]
    fn test_hidden_erases_labels() {
        let parser = hidden(is_char('a'));
        match parser.parse(Cursor::new("z")) {
            Reply::Err { message, .. } => {
                assert!(message.expected().is_empty());
            }
            _ => panic!("hidden succeeded on a mismatch"),
        }
    }
}
