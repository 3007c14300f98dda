//! Text markup tokenizer
//!
//! Splits a string into text, tag and paragraph runs. `{tag}` opens a tag,
//! `{{` is a literal brace, and a newline ends a paragraph. A `}` outside
//! a tag is plain text.
//! Lenticular ruby (`【base｜reading】`) is rewritten into ruby tags.

use crate::{Result, TextError};

/// Kind of a markup run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Tag,
    Paragraph,
}

/// A markup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal text, or the tag body without braces. Empty for paragraphs.
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, text)
    }

    pub fn tag(body: impl Into<String>) -> Self {
        Self::new(TokenKind::Tag, body)
    }

    pub fn paragraph() -> Self {
        Self::new(TokenKind::Paragraph, String::new())
    }
}

const RUBY_OPEN: char = '【';
const RUBY_CLOSE: char = '】';

/// Tokenize a marked up string
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    if !s.contains(['{', '\n', RUBY_OPEN]) {
        return Ok(vec![Token::text(s)]);
    }

    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => {
                flush_text(&mut buf, &mut tokens);
                tokens.push(Token::paragraph());
            }
            '{' => {
                if matches!(chars.peek(), Some(&(_, '{'))) {
                    chars.next();
                    buf.push('{');
                    continue;
                }

                let body_start = i + 1;
                let end = s[body_start..]
                    .find('}')
                    .map(|e| body_start + e)
                    .ok_or(TextError::UnterminatedTag { offset: i })?;

                if end == body_start {
                    return Err(TextError::EmptyTag { offset: i });
                }

                flush_text(&mut buf, &mut tokens);
                tokens.push(Token::tag(&s[body_start..end]));

                while let Some(&(j, _)) = chars.peek() {
                    if j > end {
                        break;
                    }
                    chars.next();
                }
            }
            _ => buf.push(c),
        }
    }

    flush_text(&mut buf, &mut tokens);

    tracing::debug!("Tokenized {} bytes into {} runs", s.len(), tokens.len());
    Ok(tokens)
}

fn flush_text(buf: &mut String, tokens: &mut Vec<Token>) {
    if buf.is_empty() {
        return;
    }

    if buf.contains(RUBY_OPEN) {
        expand_lenticular(buf, tokens);
    } else {
        tokens.push(Token::text(buf.as_str()));
    }
    buf.clear();
}

/// Rewrite `【base｜reading】` into `{rb}base{/rb}{rt}reading{/rt}` runs.
///
/// Brackets without a separator and a closing bracket stay literal.
pub fn expand_lenticular(text: &str, tokens: &mut Vec<Token>) {
    let mut literal = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(RUBY_OPEN) {
        let after = &rest[open + RUBY_OPEN.len_utf8()..];

        match split_ruby(after) {
            Some((base, reading, consumed)) => {
                literal.push_str(&rest[..open]);
                if !literal.is_empty() {
                    tokens.push(Token::text(std::mem::take(&mut literal)));
                }

                tokens.push(Token::tag("rb"));
                if !base.is_empty() {
                    tokens.push(Token::text(base));
                }
                tokens.push(Token::tag("/rb"));
                tokens.push(Token::tag("rt"));
                if !reading.is_empty() {
                    tokens.push(Token::text(reading));
                }
                tokens.push(Token::tag("/rt"));

                rest = &after[consumed..];
            }
            None => {
                literal.push_str(&rest[..open + RUBY_OPEN.len_utf8()]);
                rest = after;
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        tokens.push(Token::text(literal));
    }
}

/// Parse `base｜reading】`, returning both halves and the bytes consumed
fn split_ruby(s: &str) -> Option<(&str, &str, usize)> {
    let close = s.find(RUBY_CLOSE)?;
    let inner = &s[..close];

    if inner.contains(RUBY_OPEN) {
        return None;
    }

    let (sep, sep_len) = inner
        .char_indices()
        .find(|&(_, c)| c == '｜' || c == '|')
        .map(|(i, c)| (i, c.len_utf8()))?;

    Some((
        &inner[..sep],
        &inner[sep + sep_len..],
        close + RUBY_CLOSE.len_utf8(),
    ))
}
