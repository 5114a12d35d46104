//! Recursive-descent reader producing expression-node trees.
//!
//! The accepted grammar:
//!
//! ```text
//! list     := element (',' element)* [',']
//! element  := entry | literal
//! entry    := IDENT | IDENT '(' args? ')'
//! args     := element (',' element)* [',']
//! literal  := INT | FLOAT | STRING
//! ```
//!
//! Literals are accepted as top-level elements here; rejecting them with an
//! "unexpected type" diagnostic is the dispatcher's job, so syntax errors
//! and dispatch errors stay distinguishable.

use crate::errors::SyntaxError;
use crate::lexer::{Token, TokenKind, lex};
use crate::node::{ExprNode, Literal, LiteralKind};
use std::iter::Peekable;

/// Upper bound on call nesting. Input nested deeper than this is rejected
/// with [`SyntaxError::TooDeep`] instead of exhausting the stack.
pub const MAX_CALL_DEPTH: usize = 64;

type TokenCursor = Peekable<std::vec::IntoIter<Token>>;

/// Read expression text into a list of top-level nodes.
///
/// # Errors
///
/// Returns [`SyntaxError`] when the text does not fit the grammar: empty
/// input, a stray comma, an unterminated call or string, or a token outside
/// the expression language.
///
/// # Examples
///
/// ```
/// use valex_syntax::{ExprNode, read};
///
/// let nodes = read("OK, GT(5)").expect("expression should parse");
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes.first().and_then(ExprNode::name), Some("OK"));
/// ```
pub fn read(text: &str) -> Result<Vec<ExprNode>, SyntaxError> {
    let mut tokens = lex(text)?.into_iter().peekable();
    let mut entries = Vec::new();

    loop {
        match tokens.peek() {
            None if entries.is_empty() => return Err(SyntaxError::UnexpectedEnd),
            None => return Ok(entries),
            Some(token) if matches!(token.kind, TokenKind::Comma) => {
                return Err(SyntaxError::EmptyEntry { pos: token.pos });
            }
            Some(_) => entries.push(parse_element(&mut tokens, 0)?),
        }

        match tokens.next() {
            None => return Ok(entries),
            Some(Token {
                kind: TokenKind::Comma,
                ..
            }) => {
                // A trailing comma after the last element is tolerated.
                if tokens.peek().is_none() {
                    return Ok(entries);
                }
            }
            Some(token) => {
                return Err(SyntaxError::Unexpected {
                    expected: "`,`",
                    found: token.kind.describe(),
                    pos: token.pos,
                });
            }
        }
    }
}

fn parse_element(tokens: &mut TokenCursor, depth: usize) -> Result<ExprNode, SyntaxError> {
    if depth > MAX_CALL_DEPTH {
        return Err(SyntaxError::TooDeep {
            max: MAX_CALL_DEPTH,
        });
    }

    let Some(token) = tokens.next() else {
        return Err(SyntaxError::UnexpectedEnd);
    };

    match token.kind {
        TokenKind::Ident(name) => {
            if matches!(tokens.peek().map(|t| &t.kind), Some(TokenKind::LParen)) {
                tokens.next();
                let args = parse_args(tokens, depth + 1)?;
                Ok(ExprNode::Call { name, args })
            } else {
                Ok(ExprNode::Ident(name))
            }
        }
        TokenKind::Int(text) => Ok(ExprNode::Literal(Literal {
            kind: LiteralKind::Int,
            text,
        })),
        TokenKind::Float(text) => Ok(ExprNode::Literal(Literal {
            kind: LiteralKind::Float,
            text,
        })),
        TokenKind::Str(text) => Ok(ExprNode::Literal(Literal {
            kind: LiteralKind::Str,
            text,
        })),
        other @ (TokenKind::LParen | TokenKind::RParen | TokenKind::Comma) => {
            Err(SyntaxError::Unexpected {
                expected: "an entry or a literal",
                found: other.describe(),
                pos: token.pos,
            })
        }
    }
}

/// Parse a call's argument list. The cursor sits just past the opening
/// parenthesis on entry and just past the closing one on success.
fn parse_args(tokens: &mut TokenCursor, depth: usize) -> Result<Vec<ExprNode>, SyntaxError> {
    let mut args = Vec::new();

    if matches!(tokens.peek().map(|t| &t.kind), Some(TokenKind::RParen)) {
        tokens.next();
        return Ok(args);
    }

    loop {
        if let Some(token) = tokens.peek() {
            if matches!(token.kind, TokenKind::Comma) {
                return Err(SyntaxError::EmptyEntry { pos: token.pos });
            }
        }

        args.push(parse_element(tokens, depth)?);

        match tokens.next() {
            None => return Err(SyntaxError::UnexpectedEnd),
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => return Ok(args),
            Some(Token {
                kind: TokenKind::Comma,
                ..
            }) => {
                if matches!(tokens.peek().map(|t| &t.kind), Some(TokenKind::RParen)) {
                    tokens.next();
                    return Ok(args);
                }
                if tokens.peek().is_none() {
                    return Err(SyntaxError::UnexpectedEnd);
                }
            }
            Some(token) => {
                return Err(SyntaxError::Unexpected {
                    expected: "`,` or `)`",
                    found: token.kind.describe(),
                    pos: token.pos,
                });
            }
        }
    }
}
