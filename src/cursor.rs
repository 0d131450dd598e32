use thiserror::Error;

/// Error returned when reading a character at the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("end of input")]
pub struct EndOfInput;

/// 1-based line and column of a position in the source text.
///
/// Lines are separated by `'\n'`; a lone carriage return does not end a
/// line. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Immutable position in a UTF-8 source string.
///
/// A cursor is a cheap copyable value; advancing produces a new cursor and
/// never mutates. The byte offset is always on a character boundary. Two
/// cursors are equal when they point at the same offset of the same source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    input: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(input: &'src str) -> Self {
        Cursor { input, offset: 0 }
    }

    /// Get the character at the current cursor position.
    ///
    /// Returns an error if the cursor is positioned at the end of input.
    pub fn curr(&self) -> Result<char, EndOfInput> {
        self.rest().chars().next().ok_or(EndOfInput)
    }

    /// Advance the cursor past the current character.
    ///
    /// If already at the end, returns a cursor still positioned at the end.
    pub fn next(self) -> Self {
        match self.rest().chars().next() {
            Some(c) => Cursor {
                input: self.input,
                offset: self.offset + c.len_utf8(),
            },
            None => self,
        }
    }

    /// Byte offset of the cursor in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The full source string this cursor points into.
    pub fn source(&self) -> &'src str {
        self.input
    }

    /// The source text from the cursor to the end of input.
    pub fn rest(&self) -> &'src str {
        &self.input[self.offset..]
    }

    /// Number of characters between the cursor and the end of input.
    pub fn remaining(&self) -> usize {
        self.rest().chars().count()
    }

    pub fn at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Compute the 1-based line and column of the cursor from its offset.
    pub fn position(&self) -> Position {
        let before = &self.input[..self.offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Position { line, column }
    }
}
