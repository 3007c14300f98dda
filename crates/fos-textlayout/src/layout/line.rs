//! Greedy line breaking
//!
//! Takes the split opportunities marked by a classifier and keeps only the
//! ones needed to fit each line into its width budget.

use crate::glyph::{Glyph, Split};

/// Keep the last split opportunity before each overflow, demote the rest.
///
/// The first line gets `first_width`, following lines `rest_width`. The
/// last glyph on a line may overflow with its advance; only its ink width
/// is tested.
pub fn linebreak_greedy(glyphs: &mut [Glyph], first_width: f32, rest_width: f32) {
    let mut width = first_width;
    let mut x = 0.0f32;
    let mut deferred = 0.0f32;
    let mut placed = false;

    // Pending split glyph and the cursor position the next line starts from
    let mut candidate: Option<(usize, f32)> = None;

    for i in 0..glyphs.len() {
        if glyphs[i].ruby.is_annotation() {
            continue;
        }

        if glyphs[i].split == Split::Ignore {
            deferred += glyphs[i].advance;
            continue;
        }

        x += deferred;
        deferred = 0.0;

        match glyphs[i].split {
            Split::Instead => {
                if let Some((prev, _)) = candidate.take() {
                    glyphs[prev].split = Split::None;
                }
                candidate = Some((i, x + glyphs[i].advance));
                x += glyphs[i].advance;
                placed = true;
                continue;
            }
            Split::Before => {
                let after_space = matches!(
                    candidate,
                    Some((prev, split_x)) if glyphs[prev].split == Split::Instead && split_x == x
                );

                if !placed || after_space {
                    glyphs[i].split = Split::None;
                } else {
                    if let Some((prev, _)) = candidate.take() {
                        glyphs[prev].split = Split::None;
                    }
                    candidate = Some((i, x));
                }
            }
            _ => {}
        }

        if x + glyphs[i].width > width {
            if let Some((at, split_x)) = candidate.take() {
                tracing::trace!("Line break at glyph {} (x = {})", at, split_x);
                x -= split_x;
                width = rest_width;
            }
        }

        x += glyphs[i].advance;
        placed = true;
    }

    if let Some((prev, _)) = candidate {
        glyphs[prev].split = Split::None;
    }
}
