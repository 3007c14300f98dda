//! Comprehensive edge case tests for fos-textlayout
//!
//! Tests for edge cases, whole pipeline behavior, and potential bugs.

use fos_textlayout::*;

fn glyphs(text: &str) -> Vec<Glyph> {
    text.chars()
        .map(|c| Glyph::new(c, 10.0).with_metrics(16.0, 4.0, 20.0))
        .collect()
}

fn text_of(glyphs: &[Glyph]) -> String {
    glyphs.iter().filter_map(|g| g.char()).collect()
}

// ============================================================================
// TOKENIZER EDGE CASES
// ============================================================================

#[test]
fn test_plain_text_is_one_token() {
    for s in ["a", "hello world", "漢字かな", "tab\tand | pipe", "]]", "a}}b", "x}"] {
        assert_eq!(tokenize(s).unwrap(), vec![Token::text(s)]);
    }
}

#[test]
fn test_doubled_braces() {
    let tokens = tokenize("{{x}}").unwrap();
    assert_eq!(tokens, vec![Token::text("{x}}")]);
}

#[test]
fn test_trailing_newline_gives_empty_paragraph() {
    let tokens = tokenize("a\n").unwrap();
    assert_eq!(tokens, vec![Token::text("a"), Token::paragraph()]);
}

#[test]
fn test_tag_errors_report_offset() {
    let err = tokenize("ab{cd").unwrap_err();
    assert_eq!(err, TextError::UnterminatedTag { offset: 2 });
    assert!(err.to_string().contains("byte 2"));
}

#[test]
fn test_lenticular_inside_tags() {
    let tokens = tokenize("{b}【東｜とう】{/b}").unwrap();
    assert_eq!(tokens.first(), Some(&Token::tag("b")));
    assert_eq!(tokens.last(), Some(&Token::tag("/b")));
    assert!(tokens.contains(&Token::tag("rt")));
}

// ============================================================================
// CLASSIFIER EDGE CASES
// ============================================================================

#[test]
fn test_nobreak_then_list_is_whole_text() {
    let mut g = glyphs("one two 三四");
    annotate_unicode(&mut g, &BreakTable::new(), CjkProfile::Western, false);
    linebreak_nobreak(&mut g);
    assert_eq!(linebreak_list(&g), vec!["one two 三四".to_string()]);
}

#[test]
fn test_list_keeps_every_glyph_but_split_spaces() {
    let text = "the quick brown fox, 漢字かな「引用」";
    let mut g = glyphs(text);
    annotate_unicode(&mut g, &BreakTable::new(), CjkProfile::CjkNormal, false);
    linebreak_greedy(&mut g, 60.0, 60.0);

    // Put the replaced glyphs back at the end of their lines
    let mut rebuilt = String::new();
    for (range, line) in line_ranges(&g).into_iter().zip(linebreak_list(&g)) {
        rebuilt.push_str(&line);
        let last = &g[range.end - 1];
        if last.split == Split::Instead {
            rebuilt.extend(last.char());
        }
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn test_western_is_idempotent() {
    let mut g = glyphs("a b\u{200B}c");
    g.push(Glyph::displayable(5.0, 5.0));
    annotate_western(&mut g);
    let once: Vec<Split> = g.iter().map(|g| g.split).collect();
    annotate_western(&mut g);
    let twice: Vec<Split> = g.iter().map(|g| g.split).collect();
    assert_eq!(once, twice);
}

#[test]
fn test_classifiers_skip_annotations() {
    let mut g = glyphs("a x");
    mark_ruby_top(&mut g[1..]);
    annotate_western(&mut g);
    assert_eq!(g[1].split, Split::None);

    annotate_anywhere(&mut g);
    assert!(g[1..].iter().all(|g| g.split == Split::None));
}

#[test]
fn test_break_class_names() {
    assert_eq!(BreakClass::from_name("id"), Some(BreakClass::ID));
    assert_eq!(BreakClass::from_name("CB"), Some(BreakClass::CB));
    assert_eq!(BreakClass::from_name("nope"), None);
}

#[test]
fn test_mandatory_break_class() {
    let mut g = glyphs("a\u{2028}b");
    annotate_unicode(&mut g, &BreakTable::new(), CjkProfile::Western, false);
    assert_eq!(g[2].split, Split::Before);
}

// ============================================================================
// GREEDY BREAKING EDGE CASES
// ============================================================================

#[test]
fn test_greedy_respects_width() {
    let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod";
    let widths = [
        (50.0, 50.0),
        (80.0, 80.0),
        (110.0, 110.0),
        (50.0, 80.0),
        (80.0, 50.0),
        (110.0, 60.0),
        (30.0, 120.0),
        (200.0, 200.0),
    ];

    for (first, rest) in widths {
        let mut g = glyphs(text);
        annotate_western(&mut g);
        linebreak_greedy(&mut g, first, rest);

        for (i, range) in line_ranges(&g).into_iter().enumerate() {
            let budget = if i == 0 { first } else { rest };
            let body: Vec<&Glyph> = g[range]
                .iter()
                .filter(|g| g.split != Split::Instead)
                .collect();
            let Some((_, head)) = body.split_last() else {
                continue;
            };

            // A space inside the line was a split candidate before the overflow point
            if !head.iter().any(|g| g.is_space()) {
                continue;
            }

            let advance: f32 = head.iter().map(|g| g.advance).sum();
            assert!(
                advance <= budget,
                "line {i} is {advance} wide with widths ({first}, {rest})"
            );
        }
    }
}

#[test]
fn test_greedy_empty_input() {
    let mut g: Vec<Glyph> = Vec::new();
    linebreak_greedy(&mut g, 10.0, 10.0);
    assert!(linebreak_list(&g).is_empty());
}

#[test]
fn test_greedy_zero_width() {
    let mut g = glyphs("a b c");
    annotate_western(&mut g);
    linebreak_greedy(&mut g, 0.0, 0.0);
    assert_eq!(linebreak_list(&g), vec!["a", "b", "c"]);
}

#[test]
fn test_copy_splits_between_buffers() {
    let mut src = glyphs("ab cd");
    annotate_western(&mut src);
    linebreak_greedy(&mut src, 30.0, 30.0);

    let mut dst = glyphs("AB CD");
    copy_splits(&src, &mut dst);
    assert_eq!(linebreak_list(&dst), vec!["AB", "CD"]);
}

// ============================================================================
// TIMING EDGE CASES
// ============================================================================

#[test]
fn test_zero_rate_reveals_at_start() {
    let mut g = glyphs("abcdef");
    let next = assign_times(&mut g, 3.5, 0.0);
    assert_eq!(next, 3.5);
    assert!(g.iter().all(|g| g.time == 3.5));
}

#[test]
fn test_rate_spacing_skips_ruby() {
    let mut g = glyphs("abcde");
    mark_alt_ruby_top(&mut g[2..3]);
    assign_times(&mut g, 0.0, 8.0);

    let times: Vec<f64> = g.iter().map(|g| g.time).collect();
    assert_eq!(times, vec![0.125, 0.25, -1.0, 0.375, 0.5]);

    let timed: Vec<f64> = times.into_iter().filter(|t| *t >= 0.0).collect();
    assert!(timed.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_indices_strictly_increase() {
    let mut g = glyphs("abcd");
    mark_ruby_top(&mut g[1..2]);
    assign_times(&mut g, 0.0, 0.0);
    assign_indices(&mut g, 0);

    let indices: Vec<i32> = g.iter().filter(|g| g.time >= 0.0).map(|g| g.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

// ============================================================================
// ALIGNMENT EDGE CASES
// ============================================================================

#[test]
fn test_justify_one_space_moves_by_slack() {
    let mut g = glyphs("ab cd ef");
    annotate_western(&mut g);
    linebreak_greedy(&mut g, 55.0, 55.0);
    place_horizontal(&mut g, 0.0, 0.0, 0.0);
    let (lines, _) = place_vertical(&mut g, 0.0, 0.0, 0.0, 0.0);
    let before: Vec<f32> = g.iter().map(|g| g.x).collect();

    // First line "ab cd" is 50 wide, slack 7.4 rounds to 7
    align_and_justify(&mut g, &lines, 57.4, 0.0, true);

    assert_eq!(g[0].x, before[0]);
    assert_eq!(g[1].x, before[1]);
    assert_eq!(g[3].x, before[3] + 7.0);
    assert_eq!(g[4].x, before[4] + 7.0);
}

#[test]
fn test_align_ignores_ruby_width() {
    let mut g = glyphs("ab");
    g.extend(glyphs("wxyz").into_iter().map(|g| g.with_ruby(Ruby::Top)));
    place_horizontal(&mut g, 0.0, 0.0, 0.0);
    let (lines, _) = place_vertical(&mut g, 0.0, 0.0, 0.0, 0.0);
    place_ruby(&mut g, 0.0, 0.0);

    align_and_justify(&mut g, &lines, 100.0, 1.0, false);
    assert_eq!(g[0].x, 80.0);
}

// ============================================================================
// HYPERLINK EDGE CASES
// ============================================================================

#[test]
fn test_hyperlink_ids_two_areas() {
    let ids = [0u16, 0, 5, 5, 5, 0, 7];
    let mut g: Vec<Glyph> = ids
        .iter()
        .map(|&id| Glyph::new('a', 10.0).with_metrics(16.0, 4.0, 20.0).with_hyperlink(id))
        .collect();
    place_horizontal(&mut g, 0.0, 0.0, 0.0);
    let (lines, _) = place_vertical(&mut g, 0.0, 0.0, 0.0, 0.0);

    let areas = hyperlink_areas(&g, &lines);
    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].id, areas[0].x, areas[0].width), (5, 20.0, 30.0));
    assert_eq!((areas[1].id, areas[1].x, areas[1].width), (7, 60.0, 10.0));
}

#[test]
fn test_hyperlink_split_across_lines() {
    let ctx = LayoutContext::new();
    let layout = ParagraphLayout::new(&ctx)
        .width(40.0)
        .layout_markup("{a=t}aaa bbb{/a}", &mut MonospaceShaper::new(10.0, 20.0), 0.0)
        .unwrap();

    let areas = layout.hyperlinks();
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].id, areas[1].id);
    assert!(areas[1].y > areas[0].y);
}

// ============================================================================
// RIGHT TO LEFT
// ============================================================================

#[test]
fn test_rtl_keeps_line_contents() {
    let mut g = glyphs("abc def");
    annotate_western(&mut g);
    linebreak_greedy(&mut g, 40.0, 40.0);
    reverse_lines(&mut g);
    assert_eq!(linebreak_list(&g), vec!["cba", "fed"]);
    assert_eq!(text_of(&g), "cba fed");
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_style_from_json() {
    let style: ParagraphStyle = serde_json::from_str(
        r#"{
            "first_width": 300,
            "rest_width": 280,
            "language": "japanese-strict",
            "layout": "nobreak",
            "slow_cps": 30
        }"#,
    )
    .unwrap();

    assert_eq!(style.first_width, 300.0);
    assert_eq!(style.rest_width, 280.0);
    assert_eq!(style.language, Language::JapaneseStrict);
    assert_eq!(style.layout, LayoutMode::NoBreak);
    assert_eq!(style.slow_cps, 30.0);
    // Missing fields fall back to defaults
    assert_eq!(style.start_x, 0.0);
    assert!(!style.rtl);
}

#[test]
fn test_style_json_roundtrip() {
    let mut style = ParagraphStyle::default();
    style.set_align(TextAlign::Center);
    style.language = Language::KoreanWithSpaces;

    let json = serde_json::to_string(&style).unwrap();
    assert!(json.contains("korean-with-spaces"));
    let back: ParagraphStyle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, style);
}

#[test]
fn test_unknown_language_rejected() {
    let result: std::result::Result<ParagraphStyle, _> =
        serde_json::from_str(r#"{"language": "klingon"}"#);
    assert!(result.is_err());
}

#[test]
fn test_unknown_tailoring_falls_back() {
    let ctx = LayoutContext::new().tailor_named("a", "bogus");
    assert_eq!(ctx.table().get('a' as u32), BreakClass::XX);
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn test_context_shared_between_threads() {
    let ctx = LayoutContext::new().tailor("・", BreakClass::NS);
    let texts = ["first block of text", "二番目のブロック", "third・block"];

    let layouts: Vec<TextLayout> = std::thread::scope(|s| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                let ctx = &ctx;
                s.spawn(move || {
                    ParagraphLayout::new(ctx)
                        .width(60.0)
                        .layout_markup(text, &mut MonospaceShaper::new(10.0, 20.0), 0.0)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(layouts.len(), 3);
    assert!(layouts.iter().all(|l| l.line_count() >= 2));
}

// ============================================================================
// STRESS
// ============================================================================

#[test]
fn test_long_paragraph() {
    let text = "word ".repeat(2000);
    let ctx = LayoutContext::new();
    let layout = ParagraphLayout::new(&ctx)
        .width(200.0)
        .slow_cps(100.0)
        .layout_markup(&text, &mut MonospaceShaper::new(10.0, 20.0), 0.0)
        .unwrap();

    assert!(layout.line_count() > 100);
    assert!(layout.glyphs().iter().all(|g| g.x <= MAX_WIDTH));
    assert!((layout.max_time - 100.0).abs() < 1e-6);
}
