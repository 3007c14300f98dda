//! Markup to glyph blocks
//!
//! Walks tokenizer output, hands text runs to a shaper and marks the
//! resulting glyphs with their ruby role and hyperlink id. Each paragraph
//! becomes one glyph block.

use crate::glyph::{Glyph, Ruby};
use crate::tokenizer::{Token, TokenKind};
use crate::{Result, TextError};

/// Produces glyphs for a run of text.
///
/// Implementations fill in advance, width and vertical metrics. Ruby role
/// and hyperlink id are set by the caller afterwards.
pub trait GlyphShaper {
    fn shape(&mut self, text: &str, out: &mut Vec<Glyph>);
}

/// Shaper giving every character the same metrics.
///
/// Useful for tests and cell based displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceShaper {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
    pub line_spacing: f32,
}

impl MonospaceShaper {
    pub fn new(advance: f32, line_spacing: f32) -> Self {
        Self {
            advance,
            ascent: line_spacing * 0.8,
            descent: line_spacing * 0.2,
            line_spacing,
        }
    }
}

impl GlyphShaper for MonospaceShaper {
    fn shape(&mut self, text: &str, out: &mut Vec<Glyph>) {
        out.extend(text.chars().map(|c| {
            Glyph::new(c, self.advance).with_metrics(self.ascent, self.descent, self.line_spacing)
        }));
    }
}

/// Glyph blocks built from markup
#[derive(Debug, Clone, Default)]
pub struct MarkupBlocks {
    /// One block per paragraph
    pub blocks: Vec<Vec<Glyph>>,
    /// Hyperlink targets; id `n` is at index `n - 1`
    pub hyperlinks: Vec<String>,
}

/// Build glyph blocks from tokens
pub fn build_blocks(tokens: &[Token], shaper: &mut impl GlyphShaper) -> Result<MarkupBlocks> {
    let mut result = MarkupBlocks::default();
    let mut block = Vec::new();
    let mut ruby = Ruby::None;
    let mut links: Vec<u16> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Paragraph => {
                result.blocks.push(std::mem::take(&mut block));
            }
            TokenKind::Text => {
                let start = block.len();
                shaper.shape(&token.text, &mut block);

                let hyperlink = links.last().copied().unwrap_or(0);
                for g in &mut block[start..] {
                    g.ruby = ruby;
                    g.hyperlink = hyperlink;
                }
            }
            TokenKind::Tag => {
                let (name, value) = match token.text.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (token.text.as_str(), None),
                };

                match name {
                    "rb" => ruby = Ruby::Bottom,
                    "rt" => ruby = Ruby::Top,
                    "art" => ruby = Ruby::Alt,
                    "/rb" | "/rt" | "/art" => {
                        let open = match name {
                            "/rb" => Ruby::Bottom,
                            "/rt" => Ruby::Top,
                            _ => Ruby::Alt,
                        };
                        if ruby != open {
                            return Err(TextError::UnbalancedTag {
                                tag: name.to_string(),
                            });
                        }
                        ruby = Ruby::None;
                    }
                    "a" => {
                        result.hyperlinks.push(value.unwrap_or_default().to_string());
                        let id = u16::try_from(result.hyperlinks.len()).unwrap_or(u16::MAX);
                        links.push(id);
                    }
                    "/a" => {
                        if links.pop().is_none() {
                            return Err(TextError::UnbalancedTag {
                                tag: name.to_string(),
                            });
                        }
                    }
                    _ => tracing::trace!("Ignoring style tag {{{}}}", token.text),
                }
            }
        }
    }

    result.blocks.push(block);
    Ok(result)
}

/// Mark glyphs as ruby annotation text
pub fn mark_ruby_top(glyphs: &mut [Glyph]) {
    glyphs.iter_mut().for_each(|g| g.ruby = Ruby::Top);
}

/// Mark glyphs as ruby base text
pub fn mark_ruby_bottom(glyphs: &mut [Glyph]) {
    glyphs.iter_mut().for_each(|g| g.ruby = Ruby::Bottom);
}

/// Mark glyphs as alternate ruby annotation text
pub fn mark_alt_ruby_top(glyphs: &mut [Glyph]) {
    glyphs.iter_mut().for_each(|g| g.ruby = Ruby::Alt);
}
