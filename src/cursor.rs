//! Single pass scanner shared by the domain and email address parsers.

use crate::error::{ParseError, ParseErrorKind};

/// A position in an input string plus the primitives to consume it.
///
/// The cursor never backtracks. Every failing operation returns a
/// [`ParseError`] that refers to the complete input and the current
/// character position.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    /// Byte offset into `input`, always on a char boundary
    current: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, current: 0 }
    }

    /// Returns true once every character has been consumed.
    pub(crate) const fn end_reached(&self) -> bool {
        self.current == self.input.len()
    }

    /// Returns the byte offset of the next character.
    pub(crate) const fn offset(&self) -> usize {
        self.current
    }

    /// Returns the number of characters consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.input[..self.current].chars().count()
    }

    /// Returns the next character without consuming it.
    pub(crate) fn peek(&self) -> Result<char, ParseError> {
        self.input[self.current..]
            .chars()
            .next()
            .ok_or_else(|| self.parser_error(ParseErrorKind::UnexpectedEndOfInput))
    }

    /// Returns true if the next character is `c`. False at end of input.
    pub(crate) fn next_is(&self, c: char) -> bool {
        self.input[self.current..].starts_with(c)
    }

    /// Consumes and returns the next character.
    pub(crate) fn read(&mut self) -> Result<char, ParseError> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Ok(c)
    }

    /// Consumes `expected` or fails with [`ParseErrorKind::UnexpectedCharacter`].
    pub(crate) fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.next_is(expected) {
            self.current += expected.len_utf8();
            Ok(())
        } else {
            Err(self.parser_error_with_message(
                ParseErrorKind::UnexpectedCharacter,
                format!("Expected '{expected}' ({})", u32::from(expected)),
            ))
        }
    }

    /// Consumes one character matching `predicate`.
    ///
    /// `label` names the expected character class in the error message.
    pub(crate) fn expect_matching(
        &mut self,
        label: &str,
        predicate: impl Fn(char) -> bool,
    ) -> Result<char, ParseError> {
        match self.input[self.current..].chars().next() {
            Some(c) if predicate(c) => {
                self.current += c.len_utf8();
                Ok(c)
            }
            _ => Err(self.parser_error_with_message(
                ParseErrorKind::UnexpectedCharacter,
                format!("Expected '{label}'"),
            )),
        }
    }

    /// Consumes characters as long as `predicate` holds.
    pub(crate) fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        let rest = &self.input[self.current..];
        let len = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(i, _)| i);
        self.current += len;
    }

    /// Runs `block` and returns the slice of input it consumed.
    pub(crate) fn read_string(
        &mut self,
        block: impl FnOnce(&mut Self) -> Result<(), ParseError>,
    ) -> Result<&'a str, ParseError> {
        let start = self.current;
        block(self)?;
        Ok(&self.input[start..self.current])
    }

    /// Builds an error of `kind` at the current position.
    pub(crate) fn parser_error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.input, self.position())
    }

    /// Builds an error of `kind` at an earlier character `position`.
    pub(crate) fn parser_error_at(&self, kind: ParseErrorKind, position: usize) -> ParseError {
        ParseError::new(kind, self.input, position)
    }

    pub(crate) fn parser_error_with_message(
        &self,
        kind: ParseErrorKind,
        message: String,
    ) -> ParseError {
        ParseError::with_message(kind, message, self.input, self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_alpha;

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek().unwrap(), 'a');
        assert_eq!(cursor.peek().unwrap(), 'a');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn peek_at_end_fails() {
        let mut cursor = Cursor::new("a");
        cursor.read().unwrap();
        assert!(cursor.end_reached());
        let err = cursor.peek().unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn expect_reports_character_and_code() {
        let mut cursor = Cursor::new("user");
        let err = cursor.expect('@').unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedCharacter);
        assert_eq!(err.message(), "Expected '@' (64)");
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn expect_at_end_is_unexpected_character() {
        let mut cursor = Cursor::new("");
        let err = cursor.expect('"').unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedCharacter);
        assert_eq!(err.message(), "Expected '\"' (34)");
    }

    #[test]
    fn expect_matching_uses_label() {
        let mut cursor = Cursor::new("a1");
        assert_eq!(cursor.expect_matching("ALPHA", is_alpha).unwrap(), 'a');
        let err = cursor.expect_matching("ALPHA", is_alpha).unwrap_err();
        assert_eq!(err.message(), "Expected 'ALPHA'");
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn read_string_captures_consumed_slice() {
        let mut cursor = Cursor::new("abc123");
        let letters = cursor
            .read_string(|c| {
                c.skip_while(is_alpha);
                Ok(())
            })
            .unwrap();
        assert_eq!(letters, "abc");
        assert_eq!(cursor.peek().unwrap(), '1');
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        let mut cursor = Cursor::new("äb");
        cursor.read().unwrap();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.peek().unwrap(), 'b');
    }
}
