//! Expression-tree nodes produced by the reader.
//! Nodes are built bottom-up from parsed text, so a tree can never contain a
//! cycle. Literal nodes keep their source-shaped text for diagnostics.

use std::fmt;

/// One node of a parsed check expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    /// A bare identifier referencing a zero-argument function by name.
    Ident(String),
    /// A named call with an ordered argument list.
    Call {
        /// The function name being called.
        name: String,
        /// The arguments, in source order.
        args: Vec<ExprNode>,
    },
    /// A leaf literal value.
    Literal(Literal),
}

impl ExprNode {
    /// Classify this node for diagnostics.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Ident(_) => NodeKind::Identifier,
            Self::Call { .. } => NodeKind::Call,
            Self::Literal(lit) => match lit.kind {
                LiteralKind::Int => NodeKind::IntLit,
                LiteralKind::Float => NodeKind::FloatLit,
                LiteralKind::Str => NodeKind::StrLit,
            },
        }
    }

    /// Return the function name for identifier and call nodes.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Ident(name) | Self::Call { name, .. } => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// A literal leaf value with its required kind and source-shaped text.
///
/// Numeric literals keep their raw spelling so conversion errors can name
/// the offending text. String literals keep one surrounding layer of their
/// quote character around the escape-processed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// The literal kind recorded by the lexer.
    pub kind: LiteralKind,
    /// The source-shaped text of the literal.
    pub text: String,
}

/// The kind of a [`Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// An integer literal such as `42` or `-7`.
    Int,
    /// A floating-point literal such as `1.5`.
    Float,
    /// A double-quoted or backtick-quoted string literal.
    Str,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Str => "STRING",
        })
    }
}

/// Structural classification of an [`ExprNode`], used by "unexpected type"
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A bare identifier.
    Identifier,
    /// A call with arguments.
    Call,
    /// An INT literal.
    IntLit,
    /// A FLOAT literal.
    FloatLit,
    /// A STRING literal.
    StrLit,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identifier => "identifier",
            Self::Call => "call",
            Self::IntLit => "INT literal",
            Self::FloatLit => "FLOAT literal",
            Self::StrLit => "STRING literal",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_nodes_by_kind() {
        let call = ExprNode::Call {
            name: "GT".into(),
            args: vec![ExprNode::Literal(Literal {
                kind: LiteralKind::Int,
                text: "5".into(),
            })],
        };
        assert_eq!(call.kind(), NodeKind::Call);
        assert_eq!(ExprNode::Ident("OK".into()).kind(), NodeKind::Identifier);
    }

    #[test]
    fn names_identifiers_and_calls_only() {
        assert_eq!(ExprNode::Ident("OK".into()).name(), Some("OK"));
        let lit = ExprNode::Literal(Literal {
            kind: LiteralKind::Str,
            text: "\"x\"".into(),
        });
        assert_eq!(lit.name(), None);
    }

    #[test]
    fn displays_structural_kinds() {
        assert_eq!(NodeKind::StrLit.to_string(), "STRING literal");
        assert_eq!(NodeKind::Call.to_string(), "call");
    }
}
