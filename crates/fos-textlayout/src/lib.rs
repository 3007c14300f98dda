//! fOS Text Layout - Line Breaking and Placement Engine
//!
//! This crate turns shaped glyphs into laid out, timed lines:
//! - Markup tokenization (text tags, paragraphs, lenticular ruby)
//! - Line break classification (western, anywhere, UAX #14 pair table)
//! - Greedy line breaking with hanging indents
//! - Horizontal and vertical placement, ruby annotations
//! - Alignment, justification and right-to-left line reversal
//! - Reveal timing and hyperlink hit areas
//!
//! Shaping and rasterization are done elsewhere; glyphs arrive with
//! their metrics already filled in.

pub mod glyph;
pub mod tokenizer;
pub mod markup;
pub mod linebreak;
pub mod layout;
pub mod ruby;
pub mod bidi;
pub mod timing;
pub mod hyperlink;

pub use glyph::{line_ranges, Glyph, Line, Ruby, Split, MAX_WIDTH};
pub use tokenizer::{expand_lenticular, tokenize, Token, TokenKind};
pub use markup::{
    build_blocks, mark_alt_ruby_top, mark_ruby_bottom, mark_ruby_top, GlyphShaper, MarkupBlocks,
    MonospaceShaper,
};
pub use linebreak::{
    annotate_anywhere, annotate_unicode, annotate_western, copy_splits, linebreak_debug,
    linebreak_list, linebreak_nobreak, BreakClass, BreakTable, CjkProfile, Classifier,
};
pub use layout::{
    align_and_justify, linebreak_greedy, place_horizontal, place_vertical, Language,
    LayoutContext, LayoutMode, ParagraphLayout, ParagraphStyle, TextAlign, TextLayout,
};
pub use ruby::place_ruby;
pub use bidi::reverse_lines;
pub use timing::{assign_indices, assign_times, max_times};
pub use hyperlink::{hyperlink_areas, HyperlinkArea};

/// Text layout error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Open text tag at end of string (tag starts at byte {offset})")]
    UnterminatedTag { offset: usize },

    #[error("Empty text tag at byte {offset}")]
    EmptyTag { offset: usize },

    #[error("Closing tag without matching open tag: {{{tag}}}")]
    UnbalancedTag { tag: String },
}

pub type Result<T> = std::result::Result<T, TextError>;
