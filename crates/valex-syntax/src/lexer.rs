//! Lexer converting expression text into semantic tokens.
//! The scanner walks the text once, recording the byte offset of every token
//! so reader errors can point at the offending input.

use crate::errors::SyntaxError;
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Ident(String),
    Int(String),
    Float(String),
    /// String literal text with one surrounding layer of its quote character
    /// retained around the escape-processed content.
    Str(String),
    LParen,
    RParen,
    Comma,
}

impl TokenKind {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Ident(name) => format!("identifier `{name}`"),
            Self::Int(text) => format!("INT literal `{text}`"),
            Self::Float(text) => format!("FLOAT literal `{text}`"),
            Self::Str(text) => format!("STRING literal {text}"),
            Self::LParen => "`(`".to_owned(),
            Self::RParen => "`)`".to_owned(),
            Self::Comma => "`,`".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) pos: usize,
}

type Scanner<'a> = Peekable<CharIndices<'a>>;

pub(crate) fn lex(text: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_ascii_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::LParen,
                    pos,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::RParen,
                    pos,
                });
            }
            ',' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    pos,
                });
            }
            '"' => tokens.push(lex_quoted(&mut chars, pos)?),
            '`' => tokens.push(lex_raw(&mut chars, pos)?),
            c if c.is_ascii_digit() || c == '-' => tokens.push(lex_number(&mut chars, pos)?),
            c if c.is_ascii_alphabetic() || c == '_' => tokens.push(lex_ident(&mut chars, pos)),
            other => return Err(SyntaxError::UnexpectedChar { ch: other, pos }),
        }
    }

    Ok(tokens)
}

fn lex_ident(chars: &mut Scanner<'_>, pos: usize) -> Token {
    let mut name = String::new();
    while let Some(&(_, ch)) = chars.peek() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            name.push(ch);
            chars.next();
        } else {
            break;
        }
    }
    Token {
        kind: TokenKind::Ident(name),
        pos,
    }
}

/// Scan a number: optional leading `-`, digits, optional fraction, optional
/// exponent. The raw spelling is preserved for conversion diagnostics.
fn lex_number(chars: &mut Scanner<'_>, pos: usize) -> Result<Token, SyntaxError> {
    let mut text = String::new();
    let mut is_float = false;

    if matches!(chars.peek(), Some(&(_, '-'))) {
        text.push('-');
        chars.next();
        if !matches!(chars.peek(), Some(&(_, c)) if c.is_ascii_digit()) {
            return Err(SyntaxError::MalformedNumber { text, pos });
        }
    }

    push_digits(chars, &mut text);

    if matches!(chars.peek(), Some(&(_, '.'))) {
        text.push('.');
        chars.next();
        if !matches!(chars.peek(), Some(&(_, c)) if c.is_ascii_digit()) {
            return Err(SyntaxError::MalformedNumber { text, pos });
        }
        push_digits(chars, &mut text);
        is_float = true;
    }

    if matches!(chars.peek(), Some(&(_, 'e' | 'E'))) {
        let Some((_, exp)) = chars.next() else {
            return Err(SyntaxError::MalformedNumber { text, pos });
        };
        text.push(exp);
        if matches!(chars.peek(), Some(&(_, '+' | '-'))) {
            let Some((_, sign)) = chars.next() else {
                return Err(SyntaxError::MalformedNumber { text, pos });
            };
            text.push(sign);
        }
        if !matches!(chars.peek(), Some(&(_, c)) if c.is_ascii_digit()) {
            return Err(SyntaxError::MalformedNumber { text, pos });
        }
        push_digits(chars, &mut text);
        is_float = true;
    }

    let kind = if is_float {
        TokenKind::Float(text)
    } else {
        TokenKind::Int(text)
    };
    Ok(Token { kind, pos })
}

fn push_digits(chars: &mut Scanner<'_>, text: &mut String) {
    while let Some(&(_, ch)) = chars.peek() {
        if ch.is_ascii_digit() {
            text.push(ch);
            chars.next();
        } else {
            break;
        }
    }
}

/// Scan a double-quoted string, processing `\"` and `\\` escapes. Any other
/// backslash sequence passes through untouched.
fn lex_quoted(chars: &mut Scanner<'_>, pos: usize) -> Result<Token, SyntaxError> {
    chars.next();
    let mut content = String::new();
    loop {
        match chars.next() {
            None => return Err(SyntaxError::UnterminatedString { pos }),
            Some((_, '"')) => {
                return Ok(Token {
                    kind: TokenKind::Str(format!("\"{content}\"")),
                    pos,
                });
            }
            Some((_, '\\')) => match chars.next() {
                None => return Err(SyntaxError::UnterminatedString { pos }),
                Some((_, escaped @ ('"' | '\\'))) => content.push(escaped),
                Some((_, other)) => {
                    content.push('\\');
                    content.push(other);
                }
            },
            Some((_, other)) => content.push(other),
        }
    }
}

/// Scan a backtick-quoted raw string. No escape processing; the content
/// simply cannot contain a backtick.
fn lex_raw(chars: &mut Scanner<'_>, pos: usize) -> Result<Token, SyntaxError> {
    chars.next();
    let mut content = String::new();
    loop {
        match chars.next() {
            None => return Err(SyntaxError::UnterminatedString { pos }),
            Some((_, '`')) => {
                return Ok(Token {
                    kind: TokenKind::Str(format!("`{content}`")),
                    pos,
                });
            }
            Some((_, other)) => content.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        match lex(text) {
            Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
            Err(err) => panic!("lexing `{text}` failed: {err}"),
        }
    }

    #[test]
    fn tokenises_a_call_with_arguments() {
        assert_eq!(
            kinds("Between(5, 9)"),
            vec![
                TokenKind::Ident("Between".into()),
                TokenKind::LParen,
                TokenKind::Int("5".into()),
                TokenKind::Comma,
                TokenKind::Int("9".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn records_byte_positions() {
        let tokens = match lex("OK, GT(5)") {
            Ok(tokens) => tokens,
            Err(err) => panic!("lexing failed: {err}"),
        };
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 2, 4, 6, 7, 8]);
    }

    #[test]
    fn keeps_raw_spelling_of_numbers() {
        assert_eq!(
            kinds("-7, 1.5, 2e10"),
            vec![
                TokenKind::Int("-7".into()),
                TokenKind::Comma,
                TokenKind::Float("1.5".into()),
                TokenKind::Comma,
                TokenKind::Float("2e10".into()),
            ]
        );
    }

    #[test]
    fn processes_escapes_in_double_quoted_strings() {
        assert_eq!(
            kinds(r#""a\"b""#),
            vec![TokenKind::Str("\"a\"b\"".into())]
        );
        assert_eq!(
            kinds(r#""back\\slash""#),
            vec![TokenKind::Str("\"back\\slash\"".into())]
        );
    }

    #[test]
    fn leaves_unknown_escapes_untouched() {
        assert_eq!(kinds(r#""a\nb""#), vec![TokenKind::Str("\"a\\nb\"".into())]);
    }

    #[test]
    fn scans_raw_strings_without_escapes() {
        assert_eq!(
            kinds(r"`a\nb`"),
            vec![TokenKind::Str("`a\\nb`".into())]
        );
    }

    #[test]
    fn errors_on_unterminated_string() {
        let Err(err) = lex("EQ(\"abc") else {
            panic!("expected an unterminated string error");
        };
        assert_eq!(err, SyntaxError::UnterminatedString { pos: 3 });
    }

    #[test]
    fn errors_on_bare_minus() {
        let Err(err) = lex("GT(-x)") else {
            panic!("expected a malformed number error");
        };
        assert_eq!(
            err,
            SyntaxError::MalformedNumber {
                text: "-".into(),
                pos: 3
            }
        );
    }

    #[test]
    fn errors_on_unexpected_character() {
        let Err(err) = lex("GT(5) & LT(9)") else {
            panic!("expected an unexpected character error");
        };
        assert_eq!(err, SyntaxError::UnexpectedChar { ch: '&', pos: 6 });
    }

    #[test]
    fn errors_on_dot_without_fraction_digits() {
        let Err(err) = lex("GT(5.)") else {
            panic!("expected a malformed number error");
        };
        assert_eq!(
            err,
            SyntaxError::MalformedNumber {
                text: "5.".into(),
                pos: 3
            }
        );
    }
}
