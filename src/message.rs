use crate::cursor::Cursor;
use crate::expected::Expected;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// A parse error: where it happened, what was seen, and what would have
/// been accepted instead.
///
/// The `unexpected` text may be empty (user-raised failures sometimes have
/// nothing sensible to report). An optional payload lets callers attach an
/// arbitrary error value of their own; it travels with the message and is
/// exposed through [`Error::source`].
#[derive(Clone, Debug)]
pub struct Message<'src> {
    cursor: Cursor<'src>,
    unexpected: Cow<'static, str>,
    expected: Expected,
    payload: Option<Rc<dyn Error>>,
}

impl<'src> Message<'src> {
    pub fn new(cursor: Cursor<'src>, unexpected: impl Into<Cow<'static, str>>) -> Self {
        Message {
            cursor,
            unexpected: unexpected.into(),
            expected: Expected::empty(),
            payload: None,
        }
    }

    /// Message for an unexpected character, rendered in quotes.
    pub fn unexpected_char(cursor: Cursor<'src>, c: char) -> Self {
        Message::new(cursor, format!("'{}'", c.escape_debug()))
    }

    /// Message for running out of input.
    pub fn end_of_input(cursor: Cursor<'src>) -> Self {
        Message::new(cursor, "end of input")
    }

    pub fn with_expected(mut self, expected: Expected) -> Self {
        self.expected = expected;
        self
    }

    pub fn with_payload(mut self, payload: Rc<dyn Error>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Combine two messages referring to the same cursor: keeps `self`'s
    /// cursor, unexpected text and payload, concatenates the expected sets.
    pub fn merge(mut self, other: Message<'src>) -> Self {
        self.expected = self.expected.append(other.expected);
        self
    }

    pub fn cursor(&self) -> Cursor<'src> {
        self.cursor
    }

    pub fn unexpected(&self) -> &str {
        &self.unexpected
    }

    pub fn expected(&self) -> &Expected {
        &self.expected
    }

    pub fn payload(&self) -> Option<&Rc<dyn Error>> {
        self.payload.as_ref()
    }

    /// Replace the expected set (used by labelling).
    pub fn set_expected(&mut self, expected: Expected) {
        self.expected = expected;
    }

    /// Prepend labels accumulated by an earlier epsilon success.
    pub fn prepend_expected(&mut self, before: Expected) {
        self.expected = before.append(std::mem::take(&mut self.expected));
    }

    /// Consume the message, keeping only its expected set.
    pub fn into_expected(self) -> Expected {
        self.expected
    }
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.cursor.position();
        writeln!(f, "error at line {}, column {}:", pos.line, pos.column)?;
        if !self.unexpected.is_empty() {
            writeln!(f, "unexpected {}", self.unexpected)?;
        }
        if let Some(rendered) = self.expected.render() {
            writeln!(f, "expected {}", rendered)?;
        }
        Ok(())
    }
}

impl Error for Message<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.payload.as_ref().map(|p| p.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_rendering() {
        let cursor = Cursor::new("ab\ncd").next().next().next();
        let message = Message::unexpected_char(cursor, 'c')
            .with_expected(Expected::from_labels(["digit", "letter"]));

        assert_eq!(
            message.to_string(),
            "error at line 2, column 1:\nunexpected 'c'\nexpected digit or letter\n"
        );
    }

    #[test]
    fn test_empty_unexpected_line_is_omitted() {
        let cursor = Cursor::new("x");
        let message = Message::new(cursor, "").with_expected(Expected::label("digit"));

        assert_eq!(
            message.to_string(),
            "error at line 1, column 1:\nexpected digit\n"
        );
    }

    #[test]
    fn test_empty_expected_line_is_omitted() {
        let cursor = Cursor::new("x");
        let message = Message::new(cursor, "'x'");

        assert_eq!(message.to_string(), "error at line 1, column 1:\nunexpected 'x'\n");
    }

    #[test]
    fn test_bare_message() {
        let message = Message::new(Cursor::new(""), "");
        assert_eq!(message.to_string(), "error at line 1, column 1:\n");
    }

    #[test]
    fn test_expected_labels_deduplicated_in_render() {
        let cursor = Cursor::new("z");
        let message = Message::unexpected_char(cursor, 'z')
            .with_expected(Expected::from_labels(["A", "B", "A", "C"]));

        assert_eq!(
            message.to_string(),
            "error at line 1, column 1:\nunexpected 'z'\nexpected A, B or C\n"
        );
    }

    #[test]
    fn test_merge_keeps_first_cursor_and_text() {
        let first = Message::unexpected_char(Cursor::new("q"), 'q')
            .with_expected(Expected::label("A"));
        let second = Message::new(Cursor::new("q"), "something else")
            .with_expected(Expected::label("B"));

        let merged = first.merge(second);
        assert_eq!(merged.unexpected(), "'q'");
        assert_eq!(merged.expected().labels(), vec!["A", "B"]);
    }

    #[test]
    fn test_control_character_is_escaped() {
        let message = Message::unexpected_char(Cursor::new("\n"), '\n');
        assert_eq!(message.unexpected(), "'\\n'");
    }

    #[test]
    fn test_payload_is_exposed_as_source() {
        use std::error::Error as _;

        let inner: Rc<dyn Error> = Rc::new(crate::cursor::EndOfInput);
        let message = Message::new(Cursor::new(""), "boom").with_payload(inner);

        assert_eq!(message.source().unwrap().to_string(), "end of input");
    }
}
