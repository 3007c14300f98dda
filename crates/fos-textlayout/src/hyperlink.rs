//! Hyperlink hit areas

use serde::{Deserialize, Serialize};

use crate::glyph::{Glyph, Line, Split};

/// Rectangle covered by one run of a hyperlink on one line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperlinkArea {
    pub id: u16,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Earliest reveal time of the run's glyphs
    pub time: f64,
}

impl HyperlinkArea {
    /// Does the area contain the point?
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Open run while scanning a line
struct Run {
    id: u16,
    min_x: f32,
    max_x: f32,
    time: Option<f64>,
}

impl Run {
    fn finish(self, line: &Line) -> HyperlinkArea {
        HyperlinkArea {
            id: self.id,
            x: self.min_x,
            y: line.y,
            width: self.max_x - self.min_x,
            height: line.height,
            time: self.time.unwrap_or(0.0),
        }
    }
}

/// Collect one area per maximal run of glyphs sharing a hyperlink id
pub fn hyperlink_areas(glyphs: &[Glyph], lines: &[Line]) -> Vec<HyperlinkArea> {
    let mut areas = Vec::new();

    for line in lines {
        let mut run: Option<Run> = None;

        for g in line.glyphs(glyphs) {
            if g.split == Split::Instead {
                continue;
            }

            if run.as_ref().is_some_and(|r| r.id != g.hyperlink) {
                areas.extend(run.take().map(|r| r.finish(line)));
            }

            if g.hyperlink == 0 {
                continue;
            }

            let time = (g.time >= 0.0).then_some(g.time);
            match run.as_mut() {
                Some(r) => {
                    r.min_x = r.min_x.min(g.x);
                    r.max_x = r.max_x.max(g.x + g.width);
                    r.time = match (r.time, time) {
                        (Some(a), Some(b)) => Some(a.min(b)),
                        (a, b) => a.or(b),
                    };
                }
                None => {
                    run = Some(Run {
                        id: g.hyperlink,
                        min_x: g.x,
                        max_x: g.x + g.width,
                        time,
                    });
                }
            }
        }

        areas.extend(run.map(|r| r.finish(line)));
    }

    areas
}
