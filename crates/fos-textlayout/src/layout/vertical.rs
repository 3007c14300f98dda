//! Vertical placement
//!
//! Groups broken glyphs into lines and assigns each line its box and
//! baseline.

use crate::glyph::{line_ranges, Glyph, Line};

/// Build lines from split markers and set every glyph's baseline.
///
/// `leading` is added above each line, `ruby_line_leading` on top of that
/// for lines carrying ruby annotations, and `spacing` below. Returns the
/// lines and the y the next block starts at.
pub fn place_vertical(
    glyphs: &mut [Glyph],
    y: f32,
    spacing: f32,
    leading: f32,
    ruby_line_leading: f32,
) -> (Vec<Line>, f32) {
    let mut y = y;
    let mut lines = Vec::new();

    for range in line_ranges(glyphs) {
        let mut ascent = 0.0f32;
        let mut height = 0.0f32;
        let mut has_ruby = false;

        for g in &glyphs[range.clone()] {
            if g.ruby.is_annotation() {
                has_ruby = true;
                continue;
            }
            ascent = ascent.max(g.ascent);
            height = height.max(g.line_spacing);
        }

        let top = y + leading + if has_ruby { ruby_line_leading } else { 0.0 };
        let baseline = top + ascent;

        for g in &mut glyphs[range.clone()] {
            g.y = baseline;
            if g.is_displayable() && g.ascent == 0.0 {
                g.ascent = ascent;
            }
        }

        tracing::trace!("Line {:?} top {} height {}", range, top, height);

        lines.push(Line {
            y: top,
            baseline,
            height,
            glyphs: range,
            max_time: 0.0,
            eop: false,
        });

        y = top + height + spacing;
    }

    if let Some(last) = lines.last_mut() {
        last.eop = true;
    }

    (lines, y)
}
