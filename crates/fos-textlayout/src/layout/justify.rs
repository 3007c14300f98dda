//! Alignment and justification

use crate::glyph::{instead_marker, Glyph, Line, MAX_WIDTH};

/// Shift lines toward `target` (the right edge of the text area).
///
/// `text_align` is the fraction of the slack applied: 0 left, 0.5 center,
/// 1 right. With `justify`, lines other than the last of a paragraph
/// spread their slack over their U+0020 spaces instead.
pub fn align_and_justify(
    glyphs: &mut [Glyph],
    lines: &[Line],
    target: f32,
    text_align: f32,
    justify: bool,
) {
    if !justify && text_align == 0.0 {
        return;
    }

    for line in lines {
        let range = line.glyphs.clone();
        let marker = instead_marker(glyphs, &range);

        let mut ink = 0.0f32;
        let mut spaces = 0usize;
        for i in range.clone() {
            let g = &glyphs[i];
            if g.ruby.is_annotation() || Some(i) == marker {
                continue;
            }
            ink = ink.max(g.x + g.width);
            if g.character == 0x20 {
                spaces += 1;
            }
        }

        if ink >= MAX_WIDTH {
            continue;
        }

        let slack = target - ink;

        if justify && !line.eop && spaces > 0 {
            let adjustment = slack / spaces as f32;
            let mut seen = 0usize;
            let mut offset = 0.0f32;

            for i in range {
                let g = &mut glyphs[i];
                g.x += offset;

                if !g.ruby.is_annotation() && Some(i) != marker && g.character == 0x20 {
                    seen += 1;
                    offset = (seen as f32 * adjustment + 0.5).floor();
                }
            }
        } else {
            let shift = slack * text_align;
            for g in &mut glyphs[range] {
                g.x += shift;
            }
        }
    }
}
