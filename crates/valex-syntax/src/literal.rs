//! Typed extraction of primitive values from literal nodes.

use crate::errors::LiteralError;
use crate::node::{ExprNode, Literal, LiteralKind};

/// Extract an `i64` from an INT literal node.
///
/// # Errors
///
/// Returns [`LiteralError::Kind`] when the node is not an INT literal, and
/// [`LiteralError::BadInt`] when the text is out of range of an `i64`.
///
/// # Examples
///
/// ```
/// use valex_syntax::{read, read_int};
///
/// let nodes = read("-7").expect("literal should parse");
/// let node = nodes.first().expect("one node");
/// assert_eq!(read_int(node), Ok(-7));
/// ```
pub fn read_int(node: &ExprNode) -> Result<i64, LiteralError> {
    let lit = expect_literal(node, LiteralKind::Int)?;
    lit.text
        .parse::<i64>()
        .map_err(|source| LiteralError::BadInt {
            text: lit.text.clone(),
            source,
        })
}

/// Extract an `f64` from a FLOAT literal node. An INT literal is accepted
/// and numerically widened; the reverse does not hold.
///
/// # Errors
///
/// Returns [`LiteralError::Kind`] when the node is neither a FLOAT nor an
/// INT literal, [`LiteralError::BadFloat`] when the text does not convert,
/// and [`LiteralError::FloatRange`] when it converts to a non-finite value
/// (`f64` parsing saturates to infinity rather than failing).
pub fn read_float(node: &ExprNode) -> Result<f64, LiteralError> {
    let lit = match node {
        ExprNode::Literal(lit) if matches!(lit.kind, LiteralKind::Float | LiteralKind::Int) => lit,
        _ => {
            return Err(LiteralError::Kind {
                expected: LiteralKind::Float,
                found: node.kind(),
            });
        }
    };
    let value = lit
        .text
        .parse::<f64>()
        .map_err(|source| LiteralError::BadFloat {
            text: lit.text.clone(),
            source,
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LiteralError::FloatRange {
            text: lit.text.clone(),
        })
    }
}

/// Extract a `String` from a STRING literal node, stripping exactly one
/// layer of surrounding quote characters. No escape processing happens
/// here; the lexer has already done it.
///
/// # Errors
///
/// Returns [`LiteralError::Kind`] when the node is not a STRING literal.
pub fn read_str(node: &ExprNode) -> Result<String, LiteralError> {
    let lit = expect_literal(node, LiteralKind::Str)?;
    Ok(strip_quotes(&lit.text))
}

fn expect_literal(node: &ExprNode, expected: LiteralKind) -> Result<&Literal, LiteralError> {
    match node {
        ExprNode::Literal(lit) if lit.kind == expected => Ok(lit),
        _ => Err(LiteralError::Kind {
            expected,
            found: node.kind(),
        }),
    }
}

/// Remove one layer of matching surrounding quotes. Text that does not
/// carry a quote layer is returned unchanged.
fn strip_quotes(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && matches!(open, '"' | '`') => {
            chars.as_str().to_owned()
        }
        _ => text.to_owned(),
    }
}
