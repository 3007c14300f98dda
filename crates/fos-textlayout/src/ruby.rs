//! Ruby Annotations
//!
//! Places ruby text over (or, for alternate ruby, under) the base text it
//! follows. Base glyphs must already be positioned.

use crate::glyph::{Glyph, Ruby};

/// Extent of the base text an annotation run is centered on
#[derive(Debug, Clone, Copy, Default)]
struct BaseSpan {
    min_x: f32,
    max_x: f32,
    baseline: f32,
    ascent: f32,
    descent: f32,
}

impl BaseSpan {
    fn of(g: &Glyph) -> Self {
        Self {
            min_x: g.x,
            max_x: g.x + g.width,
            baseline: g.y,
            ascent: g.ascent,
            descent: g.descent,
        }
    }

    fn extend(&mut self, g: &Glyph) {
        self.min_x = self.min_x.min(g.x);
        self.max_x = self.max_x.max(g.x + g.width);
        self.ascent = self.ascent.max(g.ascent);
        self.descent = self.descent.max(g.descent);
    }

    fn center(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }
}

/// Position ruby top and alt runs relative to their base text.
///
/// A base is either a single plain glyph or a run of ruby bottom glyphs.
/// `ruby_offset` lifts top ruby further up, `alt_ruby_offset` pushes alt
/// ruby further down.
pub fn place_ruby(glyphs: &mut [Glyph], ruby_offset: f32, alt_ruby_offset: f32) {
    let mut base = BaseSpan::default();
    let mut in_bottom = false;
    let mut i = 0;

    while i < glyphs.len() {
        let role = glyphs[i].ruby;

        match role {
            Ruby::None => {
                base = BaseSpan::of(&glyphs[i]);
                in_bottom = false;
                i += 1;
            }
            Ruby::Bottom => {
                if in_bottom {
                    base.extend(&glyphs[i]);
                } else {
                    base = BaseSpan::of(&glyphs[i]);
                }
                in_bottom = true;
                i += 1;
            }
            Ruby::Top | Ruby::Alt => {
                let len = glyphs[i..].iter().take_while(|g| g.ruby == role).count();
                place_run(&mut glyphs[i..i + len], &base, role, ruby_offset, alt_ruby_offset);
                in_bottom = false;
                i += len;
            }
        }
    }
}

fn place_run(
    run: &mut [Glyph],
    base: &BaseSpan,
    role: Ruby,
    ruby_offset: f32,
    alt_ruby_offset: f32,
) {
    let Some(last) = run.last() else {
        return;
    };

    let advance: f32 = run.iter().map(|g| g.advance).sum();
    let width = advance - last.advance + last.width;
    let mut x = base.center() - width / 2.0;

    for g in run.iter_mut() {
        g.x = x;
        g.y = if role == Ruby::Alt {
            base.baseline + base.descent + g.ascent + alt_ruby_offset
        } else {
            base.baseline - base.ascent - g.descent - ruby_offset
        };
        x += g.advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(c: char, x: f32) -> Glyph {
        let mut g = Glyph::new(c, 20.0).with_metrics(16.0, 4.0, 20.0);
        g.x = x;
        g.y = 30.0;
        g
    }

    fn ruby(c: char, role: Ruby) -> Glyph {
        Glyph::new(c, 10.0)
            .with_metrics(8.0, 2.0, 10.0)
            .with_ruby(role)
    }

    #[test]
    fn test_top_ruby_centered_on_base_run() {
        let mut g = vec![
            base('東', 0.0).with_ruby(Ruby::Bottom),
            base('京', 20.0).with_ruby(Ruby::Bottom),
            ruby('と', Ruby::Top),
            ruby('う', Ruby::Top),
        ];
        place_ruby(&mut g, 1.0, 0.0);

        assert_eq!(g[2].x, 10.0);
        assert_eq!(g[3].x, 20.0);
        // baseline 30 - ascent 16 - descent 2 - offset 1
        assert_eq!(g[2].y, 11.0);
    }

    #[test]
    fn test_single_glyph_base() {
        let mut g = vec![base('a', 0.0), base('b', 20.0), ruby('x', Ruby::Top)];
        place_ruby(&mut g, 0.0, 0.0);
        assert_eq!(g[2].x, 25.0);
    }

    #[test]
    fn test_alt_ruby_below() {
        let mut g = vec![base('a', 0.0), ruby('x', Ruby::Alt)];
        place_ruby(&mut g, 0.0, 3.0);
        // baseline 30 + descent 4 + ascent 8 + offset 3
        assert_eq!(g[1].y, 45.0);
    }

    #[test]
    fn test_run_width_uses_last_ink() {
        let mut last = ruby('y', Ruby::Top);
        last.width = 4.0;
        let mut g = vec![base('a', 0.0), ruby('x', Ruby::Top), last];
        place_ruby(&mut g, 0.0, 0.0);
        // run width 14 centered on 10
        assert_eq!(g[1].x, 3.0);
    }

    #[test]
    fn test_top_and_alt_share_base() {
        let mut g = vec![
            base('a', 0.0).with_ruby(Ruby::Bottom),
            ruby('x', Ruby::Top),
            ruby('y', Ruby::Alt),
        ];
        place_ruby(&mut g, 0.0, 0.0);
        assert_eq!(g[1].x, 5.0);
        assert_eq!(g[2].x, 5.0);
    }
}
