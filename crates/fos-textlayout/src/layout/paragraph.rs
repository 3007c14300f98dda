//! Paragraph layout
//!
//! Runs the layout passes over glyph blocks, one block per paragraph.

use super::{
    align_and_justify, linebreak_greedy, place_horizontal, place_vertical, Language, LayoutMode,
    ParagraphStyle, TextAlign, TextLayout,
};
use crate::bidi::reverse_lines;
use crate::glyph::Glyph;
use crate::hyperlink::hyperlink_areas;
use crate::linebreak::{linebreak_nobreak, BreakClass, BreakTable};
use crate::markup::{build_blocks, GlyphShaper};
use crate::ruby::place_ruby;
use crate::timing::{assign_indices, assign_times, max_times};
use crate::tokenizer::tokenize;
use crate::Result;

/// Shared layout state.
///
/// Holds the break class table. Tailor it while building the context;
/// after that the context is only read and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutContext {
    table: BreakTable,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: BreakTable) -> Self {
        Self { table }
    }

    /// Override the break class of every character in `chars`
    pub fn tailor(mut self, chars: &str, class: BreakClass) -> Self {
        self.table.tailor_all(chars, class);
        self
    }

    /// Override by class name; unknown names fall back to `XX`
    pub fn tailor_named(mut self, chars: &str, name: &str) -> Self {
        self.table.tailor_named(chars, name);
        self
    }

    pub fn table(&self) -> &BreakTable {
        &self.table
    }
}

/// Paragraph layout engine
#[derive(Debug, Clone)]
pub struct ParagraphLayout<'a> {
    ctx: &'a LayoutContext,
    style: ParagraphStyle,
}

impl<'a> ParagraphLayout<'a> {
    /// Create a new paragraph layout with default style
    pub fn new(ctx: &'a LayoutContext) -> Self {
        Self {
            ctx,
            style: ParagraphStyle::default(),
        }
    }

    /// Create with specific style
    pub fn with_style(ctx: &'a LayoutContext, style: ParagraphStyle) -> Self {
        Self { ctx, style }
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    /// Set the width of every line
    pub fn width(mut self, width: f32) -> Self {
        self.style.first_width = width;
        self.style.rest_width = width;
        self
    }

    /// Set first and following line widths separately
    pub fn widths(mut self, first: f32, rest: f32) -> Self {
        self.style.first_width = first;
        self.style.rest_width = rest;
        self
    }

    pub fn indent(mut self, first: f32, rest: f32) -> Self {
        self.style.first_indent = first;
        self.style.rest_indent = rest;
        self
    }

    /// Set the top left corner
    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.style.start_x = x;
        self.style.start_y = y;
        self
    }

    /// Set text alignment
    pub fn align(mut self, align: TextAlign) -> Self {
        self.style.set_align(align);
        self
    }

    pub fn align_width(mut self, width: f32) -> Self {
        self.style.align_width = width;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.style.language = language;
        self
    }

    pub fn mode(mut self, mode: LayoutMode) -> Self {
        self.style.layout = mode;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.style.line_spacing = spacing;
        self
    }

    pub fn leading(mut self, leading: f32, ruby_leading: f32) -> Self {
        self.style.line_leading = leading;
        self.style.ruby_line_leading = ruby_leading;
        self
    }

    pub fn ruby_offsets(mut self, ruby: f32, alt_ruby: f32) -> Self {
        self.style.ruby_offset = ruby;
        self.style.alt_ruby_offset = alt_ruby;
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.style.rtl = rtl;
        self
    }

    /// Set the reveal rate in glyphs per second
    pub fn slow_cps(mut self, cps: f64) -> Self {
        self.style.slow_cps = cps;
        self
    }

    /// Layout a single paragraph
    pub fn layout_paragraph(&self, glyphs: Vec<Glyph>, start_time: f64) -> TextLayout {
        self.layout(vec![glyphs], start_time)
    }

    /// Tokenize, shape and layout marked up text
    pub fn layout_markup(
        &self,
        markup: &str,
        shaper: &mut impl GlyphShaper,
        start_time: f64,
    ) -> Result<TextLayout> {
        let tokens = tokenize(markup)?;
        let built = build_blocks(&tokens, shaper)?;

        let mut layout = self.layout(built.blocks, start_time);
        layout.targets = built.hyperlinks;
        Ok(layout)
    }

    /// Layout paragraphs, stacking them top to bottom
    pub fn layout(&self, blocks: Vec<Vec<Glyph>>, start_time: f64) -> TextLayout {
        let style = &self.style;
        let classifier = style.language.classifier();

        tracing::debug!(
            "Laying out {} paragraphs ({:?}, {:?})",
            blocks.len(),
            style.language,
            style.layout
        );

        let mut glyphs: Vec<Glyph> = Vec::new();
        let mut lines = Vec::new();
        let mut y = style.start_y;
        let mut time = start_time;
        let mut right = 0.0f32;

        for mut block in blocks {
            match style.layout {
                LayoutMode::Greedy => {
                    classifier.annotate(&mut block, self.ctx.table());
                    linebreak_greedy(
                        &mut block,
                        style.first_width - style.first_indent,
                        style.rest_width - style.rest_indent,
                    );
                }
                LayoutMode::NoBreak => linebreak_nobreak(&mut block),
            }

            if style.rtl {
                reverse_lines(&mut block);
            }

            let block_right =
                place_horizontal(&mut block, style.start_x, style.first_indent, style.rest_indent);
            right = right.max(block_right);

            let (mut block_lines, next_y) = place_vertical(
                &mut block,
                y,
                style.line_spacing,
                style.line_leading,
                style.ruby_line_leading,
            );
            y = next_y;

            place_ruby(&mut block, style.ruby_offset, style.alt_ruby_offset);
            time = assign_times(&mut block, time, style.slow_cps);

            let base = glyphs.len();
            for line in &mut block_lines {
                line.glyphs = line.glyphs.start + base..line.glyphs.end + base;
            }

            glyphs.append(&mut block);
            lines.append(&mut block_lines);
        }

        let width = style.align_width.max(right - style.start_x);
        align_and_justify(
            &mut glyphs,
            &lines,
            style.start_x + width,
            style.text_align,
            style.justify,
        );

        assign_indices(&mut glyphs, 0);
        let max_time = max_times(&glyphs, &mut lines);
        let hyperlinks = hyperlink_areas(&glyphs, &lines);
        let height = lines.last().map_or(style.start_y, |line| line.bottom());

        tracing::debug!(
            "Layout done: {} lines, {}x{}, {} hyperlink areas",
            lines.len(),
            style.start_x + width,
            height,
            hyperlinks.len()
        );

        TextLayout {
            glyphs,
            lines,
            hyperlinks,
            targets: Vec::new(),
            width: style.start_x + width,
            height,
            next_time: time,
            max_time,
        }
    }
}
