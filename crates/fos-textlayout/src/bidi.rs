//! Right-to-left line reversal
//!
//! Coarse reordering for right-to-left paragraphs: every line is reversed
//! as a whole. There is no per-run direction resolution.

use crate::glyph::{instead_marker, line_ranges, Glyph, Split};
use crate::Ruby;

/// Reverse the glyphs of each line and mark them right-to-left.
///
/// Runs after line breaking and before placement. A trailing split marker
/// stays at the line end, ruby annotations stay after their base, and a
/// `Before` split moves to the new first glyph so line boundaries are
/// unchanged.
pub fn reverse_lines(glyphs: &mut [Glyph]) {
    for range in line_ranges(glyphs) {
        let end = match instead_marker(glyphs, &range) {
            Some(marker) => marker,
            None => range.end,
        };

        let body = &mut glyphs[range.start..end];
        if body.is_empty() {
            continue;
        }

        let leading = body[0].split;
        if leading == Split::Before {
            body[0].split = Split::None;
        }

        let units = units(body);
        body.reverse();

        // Each unit is now [annotations, base] reversed; put the base first
        let mut pos = 0;
        for &(len, annotations) in units.iter().rev() {
            body[pos..pos + len].rotate_left(annotations);
            pos += len;
        }

        if leading == Split::Before {
            body[0].split = Split::Before;
        }

        for g in body.iter_mut() {
            g.rtl = true;
        }
    }
}

/// Split a line body into (length, trailing annotation count) units.
///
/// A unit is a plain glyph or a ruby base run followed by its annotation
/// glyphs. Annotations with no base before them form a unit of their own.
fn units(body: &[Glyph]) -> Vec<(usize, usize)> {
    let mut units = Vec::new();
    let mut i = 0;

    while i < body.len() {
        let start = i;

        if body[i].ruby.is_annotation() {
            while i < body.len() && body[i].ruby.is_annotation() {
                i += 1;
            }
            units.push((i - start, 0));
            continue;
        }

        if body[i].ruby == Ruby::Bottom {
            while i < body.len() && body[i].ruby == Ruby::Bottom {
                i += 1;
            }
        } else {
            i += 1;
        }

        let base_end = i;
        while i < body.len() && body[i].ruby.is_annotation() {
            i += 1;
        }
        units.push((i - start, i - base_end));
    }

    units
}
