//! Text layout module
//!
//! Geometry passes over broken glyph sequences, the paragraph style that
//! configures them and the [`TextLayout`] they produce.

mod horizontal;
mod justify;
mod line;
mod paragraph;
mod vertical;

pub use horizontal::place_horizontal;
pub use justify::align_and_justify;
pub use line::linebreak_greedy;
pub use paragraph::{LayoutContext, ParagraphLayout};
pub use vertical::place_vertical;

use serde::{Deserialize, Serialize};

use crate::glyph::{Glyph, Line, MAX_WIDTH};
use crate::hyperlink::HyperlinkArea;
use crate::linebreak::{CjkProfile, Classifier};

/// Text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlign {
    /// Fraction of the slack added to the left of each line
    pub fn fraction(self) -> f32 {
        match self {
            Self::Left | Self::Justify => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }

    pub fn is_justify(self) -> bool {
        self == Self::Justify
    }
}

/// Line breaking language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// UAX #14 rules
    #[default]
    Unicode,
    /// Break only at spaces
    Western,
    /// Break between any two glyphs
    Anywhere,
    JapaneseStrict,
    JapaneseNormal,
    JapaneseLoose,
    /// Hangul breaks at spaces like alphabetic text
    KoreanWithSpaces,
}

impl Language {
    pub fn classifier(self) -> Classifier {
        let unicode = |profile, no_ideographs| Classifier::Unicode {
            profile,
            no_ideographs,
        };

        match self {
            Self::Unicode => unicode(CjkProfile::Western, false),
            Self::Western => Classifier::Western,
            Self::Anywhere => Classifier::Anywhere,
            Self::JapaneseStrict => unicode(CjkProfile::CjkStrict, false),
            Self::JapaneseNormal => unicode(CjkProfile::CjkNormal, false),
            Self::JapaneseLoose => unicode(CjkProfile::CjkLoose, false),
            Self::KoreanWithSpaces => unicode(CjkProfile::Western, true),
        }
    }
}

/// How split opportunities are turned into line breaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Fill each line as far as it goes
    #[default]
    Greedy,
    /// Keep each paragraph on one line
    #[serde(rename = "nobreak")]
    NoBreak,
}

/// Paragraph layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    /// Width of the first line of each paragraph, indent included
    pub first_width: f32,
    /// Width of the following lines, indent included
    pub rest_width: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub first_indent: f32,
    pub rest_indent: f32,
    /// Minimum width lines are aligned within; the widest line is used
    /// when that is larger
    pub align_width: f32,
    /// Fraction of the slack added to the left of each line
    pub text_align: f32,
    pub justify: bool,
    /// Space between lines
    pub line_spacing: f32,
    /// Space above each line
    pub line_leading: f32,
    /// Extra space above lines with ruby
    pub ruby_line_leading: f32,
    pub ruby_offset: f32,
    pub alt_ruby_offset: f32,
    pub language: Language,
    pub layout: LayoutMode,
    /// Reverse lines for right-to-left text
    pub rtl: bool,
    /// Glyphs revealed per second, 0 to show everything at once
    pub slow_cps: f64,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            first_width: MAX_WIDTH,
            rest_width: MAX_WIDTH,
            start_x: 0.0,
            start_y: 0.0,
            first_indent: 0.0,
            rest_indent: 0.0,
            align_width: 0.0,
            text_align: 0.0,
            justify: false,
            line_spacing: 0.0,
            line_leading: 0.0,
            ruby_line_leading: 0.0,
            ruby_offset: 0.0,
            alt_ruby_offset: 0.0,
            language: Language::Unicode,
            layout: LayoutMode::Greedy,
            rtl: false,
            slow_cps: 0.0,
        }
    }
}

impl ParagraphStyle {
    /// Set `text_align` and `justify` from an alignment
    pub fn set_align(&mut self, align: TextAlign) {
        self.text_align = align.fraction();
        self.justify = align.is_justify();
    }
}

/// Complete text layout result
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    glyphs: Vec<Glyph>,
    lines: Vec<Line>,
    hyperlinks: Vec<HyperlinkArea>,
    targets: Vec<String>,
    /// Right edge of the text
    pub width: f32,
    /// Bottom edge of the last line
    pub height: f32,
    /// Start time for text laid out after this
    pub next_time: f64,
    /// Time the last glyph is revealed
    pub max_time: f64,
}

impl TextLayout {
    /// Create empty layout
    pub fn empty() -> Self {
        Self::default()
    }

    /// All glyphs, in line order
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Glyphs of line `i`
    pub fn line_glyphs(&self, i: usize) -> Option<&[Glyph]> {
        self.lines.get(i).map(|line| line.glyphs(&self.glyphs))
    }

    pub fn hyperlinks(&self) -> &[HyperlinkArea] {
        &self.hyperlinks
    }

    /// Target of hyperlink `id`, when laid out from markup
    pub fn hyperlink_target(&self, id: u16) -> Option<&str> {
        let index = usize::from(id).checked_sub(1)?;
        self.targets.get(index).map(String::as_str)
    }

    /// Hyperlink id under a point
    pub fn hyperlink_at(&self, x: f32, y: f32) -> Option<u16> {
        self.hyperlinks
            .iter()
            .find(|area| area.contains(x, y))
            .map(|area| area.id)
    }

    /// Move every glyph, line and hyperlink area
    pub fn offset(&mut self, dx: f32, dy: f32) {
        for g in &mut self.glyphs {
            g.x += dx;
            g.y += dy;
        }
        for line in &mut self.lines {
            line.y += dy;
            line.baseline += dy;
        }
        for area in &mut self.hyperlinks {
            area.x += dx;
            area.y += dy;
        }
        self.width += dx;
        self.height += dy;
    }

    /// Take the glyph buffer
    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.glyphs
    }
}
