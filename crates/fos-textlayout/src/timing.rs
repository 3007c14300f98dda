//! Reveal timing
//!
//! Slow text shows one glyph after another. These passes give each glyph
//! its reveal time and order, and each line the time it finishes.

use crate::glyph::{Glyph, Line};

/// Assign reveal times at `gps` glyphs per second, starting after `start`.
///
/// A rate of 0 reveals everything at `start`. Ruby annotation glyphs get
/// time and duration -1 and do not advance the clock. Returns the time the
/// next block should start from.
pub fn assign_times(glyphs: &mut [Glyph], start: f64, gps: f64) -> f64 {
    let tpg = if gps == 0.0 { 0.0 } else { 1.0 / gps };
    let mut t = start;

    for g in glyphs.iter_mut() {
        if g.ruby.is_annotation() {
            g.time = -1.0;
            g.duration = -1.0;
            continue;
        }

        t += tpg;
        g.time = t;
        g.duration = tpg;
    }

    t
}

/// Number timed glyphs in order from `start`; returns the next free index
pub fn assign_indices(glyphs: &mut [Glyph], start: i32) -> i32 {
    let mut index = start;

    for g in glyphs.iter_mut().filter(|g| g.time >= 0.0) {
        g.index = index;
        index += 1;
    }

    index
}

/// Store each line's latest reveal time and return the latest overall
pub fn max_times(glyphs: &[Glyph], lines: &mut [Line]) -> f64 {
    let mut overall = 0.0f64;

    for line in lines.iter_mut() {
        line.max_time = line
            .glyphs(glyphs)
            .iter()
            .map(|g| g.time)
            .fold(0.0, f64::max);
        overall = overall.max(line.max_time);
    }

    overall
}
