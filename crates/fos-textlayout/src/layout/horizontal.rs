//! Horizontal placement

use crate::glyph::{Glyph, Split, MAX_WIDTH};

/// Assign x positions along broken lines.
///
/// Returns the largest `x + width` of any placed glyph. Ruby annotation
/// glyphs are left for [`crate::ruby::place_ruby`].
pub fn place_horizontal(
    glyphs: &mut [Glyph],
    start_x: f32,
    first_indent: f32,
    rest_indent: f32,
) -> f32 {
    let line_start = start_x + rest_indent;
    let mut x = start_x + first_indent;
    let mut max_x = 0.0f32;

    for g in glyphs.iter_mut() {
        if g.ruby.is_annotation() {
            continue;
        }

        match g.split {
            Split::Instead => {
                // Parked at the line end; takes no room
                g.x = x;
                x = line_start;
                continue;
            }
            Split::Before => x = line_start,
            _ => {}
        }

        g.x = x + g.delta_x_adjustment;
        max_x = max_x.max(g.x + g.width);
        x = (x + g.advance).min(MAX_WIDTH);
    }

    max_x
}
