//! Line break classification
//!
//! Marks split opportunities on a glyph sequence. Three classifiers are
//! available: western (split at spaces and displayables), anywhere (split
//! between any two glyphs) and unicode (UAX #14 pair table with CJK
//! tailoring).

mod class;
mod rules;

pub use class::{BreakClass, BreakTable, PAIR_CLASSES};
pub use rules::{pair_action, Action, CjkProfile};

use crate::glyph::{line_ranges, Glyph, Ruby, Split};

/// Strategy for marking split opportunities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    /// Split at spaces (replacing them) and before displayables
    Western,
    /// Split between any two glyphs
    Anywhere,
    /// UAX #14 pair table
    Unicode {
        profile: CjkProfile,
        /// Treat ideographs as alphabetic
        no_ideographs: bool,
    },
}

impl Default for Classifier {
    fn default() -> Self {
        Self::Unicode {
            profile: CjkProfile::Western,
            no_ideographs: false,
        }
    }
}

impl Classifier {
    /// Mark split opportunities on `glyphs`
    pub fn annotate(&self, glyphs: &mut [Glyph], table: &BreakTable) {
        match *self {
            Self::Western => annotate_western(glyphs),
            Self::Anywhere => annotate_anywhere(glyphs),
            Self::Unicode {
                profile,
                no_ideographs,
            } => annotate_unicode(glyphs, table, profile, no_ideographs),
        }
    }
}

/// Split at spaces and before inline displayables. Ruby base runs are kept
/// whole.
pub fn annotate_western(glyphs: &mut [Glyph]) {
    let mut prev_bottom = false;

    for g in glyphs.iter_mut() {
        if g.ruby.is_annotation() {
            prev_bottom = false;
            continue;
        }

        let bottom = g.ruby == Ruby::Bottom;
        let inside_base = bottom && prev_bottom;
        prev_bottom = bottom;

        if inside_base {
            g.split = Split::None;
        } else if g.is_displayable() {
            g.split = Split::Before;
        } else if g.is_space() {
            g.split = Split::Instead;
        }
    }
}

/// Split between any two glyphs. Spaces are replaced by the split and ruby
/// base runs are kept whole.
pub fn annotate_anywhere(glyphs: &mut [Glyph]) {
    let mut prev_bottom = false;

    for g in glyphs.iter_mut() {
        let bottom = g.ruby == Ruby::Bottom;

        if g.ruby.is_annotation() {
            prev_bottom = false;
            continue;
        }

        g.split = if bottom && prev_bottom {
            Split::None
        } else if g.is_space() {
            Split::Instead
        } else {
            Split::Before
        };
        prev_bottom = bottom;
    }
}

/// Mark opportunities from the UAX #14 pair table
pub fn annotate_unicode(
    glyphs: &mut [Glyph],
    table: &BreakTable,
    profile: CjkProfile,
    no_ideographs: bool,
) {
    let mut prev: Option<BreakClass> = None;
    let mut space: Option<usize> = None;

    for i in 0..glyphs.len() {
        if glyphs[i].ruby.is_annotation() {
            continue;
        }

        if glyphs[i].split != Split::Ignore {
            glyphs[i].split = Split::None;
        }

        let mut class = if glyphs[i].is_displayable() {
            BreakClass::CB
        } else {
            profile.resolve(table.get(glyphs[i].character), no_ideographs)
        };

        // Ruby base text is never split internally
        if glyphs[i].ruby == Ruby::Bottom && i > 0 && glyphs[i - 1].ruby == Ruby::Bottom {
            if !matches!(class, BreakClass::SP | BreakClass::CM) {
                prev = Some(class);
            }
            space = None;
            continue;
        }

        match class {
            BreakClass::SP => {
                space = Some(i);
                continue;
            }
            BreakClass::CM => {
                if prev.is_some() && space.is_none() {
                    continue;
                }
                class = BreakClass::AL;
            }
            _ => {}
        }

        let action = match prev {
            Some(before) => pair_action(before, class),
            None => Action::Prohibited,
        };

        match (action, space) {
            (Action::Direct | Action::Indirect, Some(s)) => glyphs[s].split = Split::Instead,
            (Action::Direct, None) => glyphs[i].split = Split::Before,
            _ => {}
        }

        prev = Some(class);
        space = None;
    }
}

/// Clear every split opportunity so the text stays on one line
pub fn linebreak_nobreak(glyphs: &mut [Glyph]) {
    for g in glyphs.iter_mut() {
        g.split = Split::None;
    }
}

/// Copy split markers between two equally long glyph sequences
pub fn copy_splits(from: &[Glyph], to: &mut [Glyph]) {
    assert_eq!(
        from.len(),
        to.len(),
        "split copy between sequences of different lengths"
    );

    for (src, dst) in from.iter().zip(to.iter_mut()) {
        dst.split = src.split;
    }
}

fn glyph_char(g: &Glyph) -> char {
    if g.is_displayable() {
        '\u{FFFC}'
    } else {
        g.char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Render split decisions as text: `|` marks every line boundary and
/// replaced glyphs are dropped.
pub fn linebreak_debug(glyphs: &[Glyph]) -> String {
    let mut out = String::from("|");

    for g in glyphs {
        match g.split {
            Split::Instead => out.push('|'),
            Split::Before => {
                out.push('|');
                out.push(glyph_char(g));
            }
            _ => out.push(glyph_char(g)),
        }
    }

    out.push('|');
    out
}

/// Text of each line, without the glyphs replaced by splits
pub fn linebreak_list(glyphs: &[Glyph]) -> Vec<String> {
    line_ranges(glyphs)
        .into_iter()
        .map(|range| {
            glyphs[range]
                .iter()
                .filter(|g| g.split != Split::Instead)
                .map(glyph_char)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(text: &str) -> Vec<Glyph> {
        text.chars().map(|c| Glyph::new(c, 10.0)).collect()
    }

    fn unicode(text: &str, profile: CjkProfile) -> Vec<Glyph> {
        let mut g = glyphs(text);
        annotate_unicode(&mut g, &BreakTable::new(), profile, false);
        g
    }

    #[test]
    fn test_western() {
        let mut g = glyphs("ab cd");
        g.push(Glyph::displayable(20.0, 10.0));
        annotate_western(&mut g);
        assert_eq!(linebreak_debug(&g), "|ab|cd|\u{FFFC}|");
    }

    #[test]
    fn test_western_keeps_ruby_base_whole() {
        let mut g = glyphs("x東 京とう");
        for c in &mut g[1..4] {
            c.ruby = Ruby::Bottom;
        }
        g[4].ruby = Ruby::Top;
        g[5].ruby = Ruby::Top;
        annotate_western(&mut g);

        let splits: Vec<Split> = g.iter().map(|g| g.split).collect();
        assert_eq!(splits, vec![Split::None; 6]);
    }

    #[test]
    fn test_western_base_after_annotation_may_split() {
        let mut g = glyphs("a x");
        g.push(Glyph::displayable(10.0, 10.0).with_ruby(Ruby::Bottom));
        g[0].ruby = Ruby::Bottom;
        g[1].ruby = Ruby::Top;
        g[2].ruby = Ruby::Top;
        annotate_western(&mut g);
        assert_eq!(g[3].split, Split::Before);
    }

    #[test]
    fn test_anywhere() {
        let mut g = glyphs("ab c");
        annotate_anywhere(&mut g);
        assert_eq!(linebreak_debug(&g), "||a|b||c|");
        assert_eq!(linebreak_list(&g), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_anywhere_keeps_ruby_base_whole() {
        let mut g = glyphs("a東京");
        g[1].ruby = Ruby::Bottom;
        g[2].ruby = Ruby::Bottom;
        annotate_anywhere(&mut g);
        assert_eq!(g[1].split, Split::Before);
        assert_eq!(g[2].split, Split::None);
    }

    #[test]
    fn test_unicode_spaces() {
        let g = unicode("hello world", CjkProfile::Western);
        assert_eq!(linebreak_debug(&g), "|hello|world|");
        assert_eq!(linebreak_list(&g), vec!["hello", "world"]);
    }

    #[test]
    fn test_unicode_last_space_replaced() {
        let g = unicode("a  b", CjkProfile::Western);
        assert_eq!(g[1].split, Split::None);
        assert_eq!(g[2].split, Split::Instead);
    }

    #[test]
    fn test_unicode_hyphen() {
        let g = unicode("well-known", CjkProfile::Western);
        assert_eq!(linebreak_list(&g), vec!["well-", "known"]);
    }

    #[test]
    fn test_unicode_ideographs() {
        let g = unicode("漢字。", CjkProfile::Western);
        assert_eq!(linebreak_debug(&g), "|漢|字。|");
    }

    #[test]
    fn test_small_kana_profiles() {
        let strict = unicode("あっ", CjkProfile::CjkStrict);
        assert_eq!(strict[1].split, Split::None);

        let normal = unicode("あっ", CjkProfile::CjkNormal);
        assert_eq!(normal[1].split, Split::Before);
    }

    #[test]
    fn test_combining_mark_attaches() {
        let g = unicode("e\u{301}漢", CjkProfile::Western);
        assert_eq!(g[1].split, Split::None);
        assert_eq!(g[2].split, Split::Before);
    }

    #[test]
    fn test_no_ideographs() {
        let mut g = glyphs("漢字");
        annotate_unicode(&mut g, &BreakTable::new(), CjkProfile::Western, true);
        assert!(g.iter().all(|g| g.split == Split::None));
    }

    #[test]
    fn test_ruby_base_not_split() {
        let mut g = glyphs("東京とう");
        g[0].ruby = Ruby::Bottom;
        g[1].ruby = Ruby::Bottom;
        g[2].ruby = Ruby::Top;
        g[3].ruby = Ruby::Top;
        annotate_unicode(&mut g, &BreakTable::new(), CjkProfile::Western, false);
        assert!(g.iter().all(|g| g.split == Split::None));
    }

    #[test]
    fn test_tailoring_changes_result() {
        let mut table = BreakTable::new();
        table.tailor('字', BreakClass::NS);
        let mut g = glyphs("漢字");
        annotate_unicode(&mut g, &table, CjkProfile::Western, false);
        assert_eq!(g[1].split, Split::None);
    }

    #[test]
    fn test_displayable_breaks() {
        let mut g = glyphs("漢");
        g.push(Glyph::displayable(10.0, 10.0));
        annotate_unicode(&mut g, &BreakTable::new(), CjkProfile::Western, false);
        assert_eq!(g[1].split, Split::Before);
    }

    #[test]
    fn test_nobreak() {
        let mut g = unicode("one two three", CjkProfile::Western);
        linebreak_nobreak(&mut g);
        assert_eq!(linebreak_list(&g), vec!["one two three"]);
    }

    #[test]
    fn test_unicode_is_idempotent() {
        let mut g = unicode("a b 漢字", CjkProfile::Western);
        let once = g.clone();
        annotate_unicode(&mut g, &BreakTable::new(), CjkProfile::Western, false);
        assert_eq!(g, once);
    }

    #[test]
    fn test_copy_splits() {
        let from = unicode("a b", CjkProfile::Western);
        let mut to = glyphs("x y");
        copy_splits(&from, &mut to);
        assert_eq!(to[1].split, Split::Instead);
    }

    #[test]
    #[should_panic]
    fn test_copy_splits_length_mismatch() {
        let from = glyphs("ab");
        let mut to = glyphs("abc");
        copy_splits(&from, &mut to);
    }
}
