use crate::error::XmlError::{NestingTooDeep, UnexpectedCharacter};
use crate::error::{ErrorPos, XmlError};
use crate::xmlchar::XmlChar;

/// Default maximum element nesting depth.
pub(crate) const DEFAULT_MAX_DEPTH: u32 = 256;

/// Cursor over the text of one parse session. The parser threads it by
/// `&mut` through every recursive call and backtracks by resetting `pos`.
///
/// It also counts how many elements are currently open, so deeply nested
/// input fails with an error instead of exhausting the stack.
pub struct CharIter<'a> {
    pub(crate) pos: usize,
    pub(crate) text: &'a str,
    depth: u32,
    max_depth: u32,
}

impl<'a> CharIter<'a> {
    pub fn with_max_depth(text: &'a str, max_depth: u32) -> Self {
        CharIter { pos: 0, text, depth: 0, max_depth }
    }

    /// Enter an element. Fails at the current position if the limit is exceeded.
    pub fn increment_depth(&mut self) -> Result<(), XmlError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(NestingTooDeep { max_depth: self.max_depth, pos: self.pos });
        }
        Ok(())
    }

    /// Leave an element (saturating at 0).
    pub fn decrement_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Get the current position as a byte index in the underlying string slice
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor back to a position obtained from [pos](CharIter::pos)
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// If the iterator has more characters
    pub fn has_next(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Get the current character without advancing the iterator.
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Get the current character and advance the iterator by its length.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance the iterator while the current char is a whitespace
    pub fn skip_spaces(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_xml_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace and return the character that follows, leaving the
    /// cursor on it.
    pub fn peek_non_white(&mut self) -> Option<char> {
        self.skip_spaces();
        self.peek()
    }

    /// Test if the next non-whitespace char equals `expected`, consuming it if so.
    pub fn match_char(&mut self, expected: char) -> Result<(), XmlError> {
        match self.peek_non_white() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            found => Err(UnexpectedCharacter { expected, found, pos: self.pos }),
        }
    }

    /// Consume everything up to (not including) `terminal`.
    /// Returns `None` and leaves the cursor untouched if `terminal` never occurs.
    pub fn consume_until(&mut self, terminal: char) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        let len = rest.find(terminal)?;
        self.pos += len;
        Some(&rest[..len])
    }

    /// Slice of the underlying text between two positions
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Line and column of a byte position
    pub fn error_pos_of(&self, pos: usize) -> ErrorPos {
        let pos = pos.min(self.text.len());
        let before = &self.text[..pos];
        let row = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        ErrorPos {
            row,
            col: before[line_start..].chars().count() + 1,
        }
    }
}
