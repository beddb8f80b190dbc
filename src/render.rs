//! Single-layer box renderer
//!
//! Turns a block of lines into the same block surrounded by one border.
//! Widths are measured with [`display_width`], so the input may itself be
//! a colored box from a previous layer.

use tracing::trace;

use crate::color::{paint, Color};
use crate::glyphs::GlyphSet;
use crate::width::{display_width, max_line_width};

/// Blank space between the border and the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Blank lines above and below the content
    pub vertical: usize,
    /// Spaces left and right of each content line
    pub horizontal: usize,
}

impl Padding {
    pub fn new(vertical: usize, horizontal: usize) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

/// Style attributes for one nesting level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layer {
    pub border_color: Option<Color>,
    /// Title drawn into the top border, empty for none
    pub title: String,
    pub title_color: Option<Color>,
    /// Only set on the innermost layer
    pub content_color: Option<Color>,
}

/// Render one bordered layer around `lines`.
///
/// The interior is as wide as the widest line plus horizontal padding, or
/// as wide as the title if that is wider. Titles are never truncated.
pub fn render<S: AsRef<str>>(
    lines: &[S],
    layer: &Layer,
    glyphs: &GlyphSet,
    padding: Padding,
) -> Vec<String> {
    let hpad = padding.horizontal;
    let title_width = display_width(&layer.title);
    let inner_width = interior_width(lines, title_width, hpad);

    trace!(
        lines = lines.len(),
        inner_width,
        title_width,
        "rendering layer"
    );

    let border = |text: &str| paint(layer.border_color, text);
    let edge = |glyph: char, count: usize| -> String {
        if count == 0 {
            String::new()
        } else {
            border(&glyph.to_string().repeat(count))
        }
    };
    let ns = border(&glyphs.ns.to_string());

    let mut out = Vec::with_capacity(lines.len() + 2 + 2 * padding.vertical);

    let mut top = border(&glyphs.nw.to_string());
    if !layer.title.is_empty() {
        top.push_str(&paint(layer.title_color, &layer.title));
    }
    top.push_str(&edge(glyphs.we, inner_width - title_width));
    top.push_str(&border(&glyphs.ne.to_string()));
    out.push(top);

    let blank = format!("{}{}{}", ns, " ".repeat(inner_width), ns);
    out.extend(std::iter::repeat(blank.clone()).take(padding.vertical));

    let side = " ".repeat(hpad);
    for line in lines {
        let line = line.as_ref();
        let fill = line_fill(inner_width, line, hpad);
        out.push(format!(
            "{ns}{side}{content}{side}{fill}{ns}",
            ns = ns,
            side = side,
            content = paint(layer.content_color, line),
            fill = " ".repeat(fill),
        ));
    }

    out.extend(std::iter::repeat(blank).take(padding.vertical));

    let mut bottom = border(&glyphs.sw.to_string());
    bottom.push_str(&edge(glyphs.we, inner_width));
    bottom.push_str(&border(&glyphs.se.to_string()));
    out.push(bottom);

    out
}

/// Columns between the two vertical borders.
fn interior_width<S: AsRef<str>>(lines: &[S], title_width: usize, hpad: usize) -> usize {
    max_line_width(lines)
        .saturating_add(hpad.saturating_mul(2))
        .max(title_width)
}

/// Spaces after the right padding that bring `line` up to `inner_width`.
fn line_fill(inner_width: usize, line: &str, hpad: usize) -> usize {
    inner_width
        .saturating_sub(display_width(line))
        .saturating_sub(hpad.saturating_mul(2))
}
