use thiserror::Error;

use crate::list::ChildId;

/// A failure while reading XML text. Every variant carries the byte offset
/// at which the parser gave up.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XmlError {
    #[error("expected '{expected}' at byte {pos}, found {}", describe(.found))]
    UnexpectedCharacter { expected: char, found: Option<char>, pos: usize },

    #[error("invalid identifier at byte {pos}")]
    InvalidIdentifier { pos: usize },

    #[error("unterminated text starting at byte {pos}")]
    UnterminatedText { pos: usize },

    #[error("unterminated attribute value starting at byte {pos}")]
    UnterminatedAttributeValue { pos: usize },

    #[error("end tag </{found}> at byte {pos} does not match start tag <{expected}>")]
    MismatchedEndTag { expected: String, found: String, pos: usize },

    #[error("unexpected content after the root element at byte {pos}")]
    TrailingContent { pos: usize },

    #[error("element at byte {pos} is nested deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: u32, pos: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{}'", c.escape_debug()),
        None => "end of input".to_string(),
    }
}

impl XmlError {
    pub fn pos(&self) -> usize {
        match self {
            XmlError::UnexpectedCharacter { pos, .. }
            | XmlError::InvalidIdentifier { pos }
            | XmlError::UnterminatedText { pos }
            | XmlError::UnterminatedAttributeValue { pos }
            | XmlError::MismatchedEndTag { pos, .. }
            | XmlError::TrailingContent { pos }
            | XmlError::NestingTooDeep { pos, .. } => *pos,
        }
    }

    /// True if the input ran out before the document was complete.
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            XmlError::UnterminatedText { .. }
                | XmlError::UnterminatedAttributeValue { .. }
                | XmlError::UnexpectedCharacter { found: None, .. }
        )
    }
}

/// One-based line and column of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPos {
    pub row: usize,
    pub col: usize,
}

/// A stored attribute value could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    #[error("attribute `{name}` has value `{value}`, which is not a valid {expected}")]
    InvalidValue { name: String, value: String, expected: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{0:?} is not a member of this child list")]
    NotAMember(ChildId),
}
