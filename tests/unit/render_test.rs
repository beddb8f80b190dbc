//! Unit tests for the single-layer renderer

use nestbox::{render, strip_ansi, Color, GlyphSet, Layer, Padding};

use crate::helpers::{assert_uniform_width, lines};

#[test]
fn ascii_example_box() {
    let out = render(&["hi"], &Layer::default(), &GlyphSet::ASCII, Padding::new(0, 1));
    assert_eq!(out.join("\n"), "+----+\n| hi |\n+----+");
}

#[test]
fn long_title_fills_top_border_exactly() {
    let layer = Layer {
        title: "LongTitle".into(),
        ..Layer::default()
    };
    let out = render(&["x"], &layer, &GlyphSet::ASCII, Padding::default());
    assert_eq!(out[0], "+LongTitle+");
    assert_uniform_width(&out);
}

#[test]
fn colored_title_counts_visible_width_only() {
    let layer = Layer {
        title: "\x1b[35mabc\x1b[0m".into(),
        ..Layer::default()
    };
    let out = render(&["abcdef"], &layer, &GlyphSet::ASCII, Padding::default());
    assert_eq!(strip_ansi(&out[0]), "+abc---+");
}

#[test]
fn every_line_has_same_width_with_padding_and_colors() {
    let layer = Layer {
        border_color: Some(Color::Indexed(129)),
        title: "Title".into(),
        title_color: Some(Color::Yellow),
        content_color: Some(Color::Green),
    };
    let input = lines(&["short", "a much longer line", "", "日本語"]);
    let out = render(&input, &layer, &GlyphSet::UNICODE, Padding::new(1, 2));
    assert_eq!(out.len(), input.len() + 2 + 2);
    assert_eq!(assert_uniform_width(&out), "a much longer line".len() + 4 + 2);
}

#[test]
fn cjk_content_is_measured_in_code_points() {
    let out = render(&["日本語", "ab"], &Layer::default(), &GlyphSet::ASCII, Padding::default());
    assert_eq!(out, vec!["+---+", "|日本語|", "|ab |", "+---+"]);
    for line in &out {
        assert_eq!(strip_ansi(line).chars().count(), 5);
    }
}

#[test]
fn plain_box_round_trips() {
    let input = lines(&["one", "two words", "3"]);
    let out = render(&input, &Layer::default(), &GlyphSet::PLAIN, Padding::default());
    let body: Vec<&str> = out[1..out.len() - 1].iter().map(|l| l.trim()).collect();
    assert_eq!(body, vec!["one", "two words", "3"]);
    assert!(out[0].trim().is_empty());
}
