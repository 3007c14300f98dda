//! Glyph and line records shared by every layout stage

use std::ops::Range;
use std::sync::Arc;

/// Largest coordinate the engine produces. Cursors are clamped to it and
/// lines reaching it are not realigned.
pub const MAX_WIDTH: f32 = 32767.0;

/// Line split opportunity at a glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Split {
    /// No split here
    #[default]
    None,
    /// Split before this glyph; it starts the next line
    Before,
    /// Split replaces this glyph (usually a space)
    Instead,
    /// Glyph hangs: its advance is not checked against the line width
    Ignore,
}

/// Role of a glyph in a ruby annotation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ruby {
    #[default]
    None,
    /// Annotation text shown over the base
    Top,
    /// Base text the annotation belongs to
    Bottom,
    /// Alternate annotation shown under the base
    Alt,
}

impl Ruby {
    /// True for annotation glyphs, which take no room in the line
    pub fn is_annotation(self) -> bool {
        matches!(self, Ruby::Top | Ruby::Alt)
    }
}

/// A positioned unit of text
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Unicode code point, or 0 for an inline displayable
    pub character: u32,
    pub x: f32,
    /// Baseline y
    pub y: f32,
    pub ascent: f32,
    pub descent: f32,
    pub line_spacing: f32,
    /// Ink width
    pub width: f32,
    /// Cursor advance
    pub advance: f32,
    pub split: Split,
    pub ruby: Ruby,
    /// Reveal time in seconds, -1 for annotation glyphs
    pub time: f64,
    pub duration: f64,
    /// Hyperlink id, 0 when not part of a link
    pub hyperlink: u16,
    /// Reveal order, -1 until timed
    pub index: i32,
    pub shader: Option<Arc<str>>,
    pub rtl: bool,
    /// Added to x at placement without moving the cursor
    pub delta_x_adjustment: f32,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            character: 0,
            x: 0.0,
            y: 0.0,
            ascent: 0.0,
            descent: 0.0,
            line_spacing: 0.0,
            width: 0.0,
            advance: 0.0,
            split: Split::None,
            ruby: Ruby::None,
            time: 0.0,
            duration: 0.0,
            hyperlink: 0,
            index: -1,
            shader: None,
            rtl: false,
            delta_x_adjustment: 0.0,
        }
    }
}

impl Glyph {
    /// Glyph for `c` whose ink width equals its advance
    pub fn new(c: char, advance: f32) -> Self {
        Self {
            character: c as u32,
            width: advance,
            advance,
            ..Self::default()
        }
    }

    /// Inline displayable (code point 0)
    pub fn displayable(width: f32, line_spacing: f32) -> Self {
        Self {
            width,
            advance: width,
            line_spacing,
            ..Self::default()
        }
    }

    /// Set vertical metrics
    pub fn with_metrics(mut self, ascent: f32, descent: f32, line_spacing: f32) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self.line_spacing = line_spacing;
        self
    }

    /// Set hyperlink id
    pub fn with_hyperlink(mut self, id: u16) -> Self {
        self.hyperlink = id;
        self
    }

    /// Set ruby role
    pub fn with_ruby(mut self, ruby: Ruby) -> Self {
        self.ruby = ruby;
        self
    }

    /// Character, if the code point is a valid scalar value
    pub fn char(&self) -> Option<char> {
        char::from_u32(self.character)
    }

    /// Is this an inline displayable rather than a character?
    pub fn is_displayable(&self) -> bool {
        self.character == 0
    }

    /// Is this a space or zero width space?
    pub fn is_space(&self) -> bool {
        self.character == 0x20 || self.character == 0x200B
    }
}

/// One laid out line
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Top of the line box
    pub y: f32,
    pub baseline: f32,
    pub height: f32,
    /// Glyphs of this line within the layout's glyph buffer
    pub glyphs: Range<usize>,
    /// Latest reveal time of any glyph on the line
    pub max_time: f64,
    /// Last line of its paragraph
    pub eop: bool,
}

impl Line {
    /// Bottom of the line box
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Glyphs of this line
    pub fn glyphs<'a>(&self, all: &'a [Glyph]) -> &'a [Glyph] {
        &all[self.glyphs.clone()]
    }
}

/// Split a broken glyph sequence into line ranges.
///
/// An `Instead` glyph ends its line and stays its last member; a `Before`
/// glyph starts a new line unless it already is at a line start.
pub fn line_ranges(glyphs: &[Glyph]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for (i, g) in glyphs.iter().enumerate() {
        match g.split {
            Split::Before if i > start => {
                ranges.push(start..i);
                start = i;
            }
            Split::Instead => {
                ranges.push(start..i + 1);
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < glyphs.len() {
        ranges.push(start..glyphs.len());
    }

    ranges
}

/// Index of the split marker closing `range`, if it ends with one
pub(crate) fn instead_marker(glyphs: &[Glyph], range: &Range<usize>) -> Option<usize> {
    let last = range.end.checked_sub(1)?;
    (last >= range.start && glyphs[last].split == Split::Instead).then_some(last)
}
