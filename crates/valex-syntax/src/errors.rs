//! Error types shared by the lexer, reader, and literal extraction.

use crate::node::{LiteralKind, NodeKind};
use thiserror::Error;

/// Errors surfaced while reading expression text into a node tree.
///
/// Positions are zero-based byte offsets into the original text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character outside the expression grammar was encountered.
    #[error("unexpected character `{ch}` at byte {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        pos: usize,
    },
    /// A string literal was opened but never closed.
    #[error("unterminated string literal starting at byte {pos}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        pos: usize,
    },
    /// A numeric literal could not be tokenised.
    #[error("malformed number `{text}` at byte {pos}")]
    MalformedNumber {
        /// The text scanned so far.
        text: String,
        /// Byte offset of the start of the number.
        pos: usize,
    },
    /// A comma with no entry before it (a leading or doubled comma).
    #[error("empty entry at the comma at byte {pos}")]
    EmptyEntry {
        /// Byte offset of the stray comma.
        pos: usize,
    },
    /// A token that does not fit the grammar at this point.
    #[error("expected {expected}, found {found} at byte {pos}")]
    Unexpected {
        /// What the grammar allows here.
        expected: &'static str,
        /// A description of the token actually found.
        found: String,
        /// Byte offset of the offending token.
        pos: usize,
    },
    /// The text ended where the grammar requires more input.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// Calls were nested beyond the reader's fixed depth bound.
    #[error("calls nested deeper than {max} levels")]
    TooDeep {
        /// The depth bound that was exceeded.
        max: usize,
    },
}

/// Errors surfaced while extracting a typed value from a literal node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The node was not a literal of the required kind.
    #[error("expected {expected} literal, found {found}")]
    Kind {
        /// The literal kind the slot requires.
        expected: LiteralKind,
        /// The structural kind actually found.
        found: NodeKind,
    },
    /// The literal text did not convert to an integer.
    #[error("couldn't make an int from `{text}`: {source}")]
    BadInt {
        /// The offending literal text.
        text: String,
        /// The underlying conversion failure.
        source: std::num::ParseIntError,
    },
    /// The literal text did not convert to a float.
    #[error("couldn't make a float from `{text}`: {source}")]
    BadFloat {
        /// The offending literal text.
        text: String,
        /// The underlying conversion failure.
        source: std::num::ParseFloatError,
    },
    /// The literal text converted to a non-finite float.
    #[error("couldn't make a float from `{text}`: the value is out of range of an f64")]
    FloatRange {
        /// The offending literal text.
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{LiteralKind, NodeKind};

    #[test]
    fn formats_kind_mismatch() {
        let err = LiteralError::Kind {
            expected: LiteralKind::Int,
            found: NodeKind::StrLit,
        };
        assert_eq!(err.to_string(), "expected INT literal, found STRING literal");
    }

    #[test]
    fn formats_stray_comma() {
        let err = SyntaxError::EmptyEntry { pos: 3 };
        assert_eq!(err.to_string(), "empty entry at the comma at byte 3");
    }

    #[test]
    fn names_offending_literal_text() {
        let Err(source) = "999999999999999999999999999999".parse::<i64>() else {
            panic!("parse should overflow");
        };
        let err = LiteralError::BadInt {
            text: "999999999999999999999999999999".into(),
            source,
        };
        assert!(
            err.to_string()
                .starts_with("couldn't make an int from `999999999999999999999999999999`:")
        );
    }
}
