//! Nesting sequencer
//!
//! Applies the single-layer renderer `depth` times. Level 0 is the
//! outermost border and level `depth - 1` the innermost. Attributes are
//! resolved outermost first, which is the order the color theme is
//! queried in, and the layers are then drawn from the inside out.

use tracing::debug;

use crate::color::Color;
use crate::glyphs::GlyphSet;
use crate::palette::ColorTheme;
use crate::render::{render, Layer, Padding};

/// Pick the value for level `index`: the element at `index` if present,
/// otherwise the first element, otherwise `None`.
pub fn resolve<T>(list: &[T], index: usize) -> Option<&T> {
    list.get(index).or_else(|| list.first())
}

/// Per-level attribute lists as supplied by the user.
///
/// Each list is empty, holds one value for every level, or holds exactly
/// one value per level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelLists {
    pub border_colors: Vec<Option<Color>>,
    pub title_colors: Vec<Option<Color>>,
    pub titles: Vec<String>,
}

/// Everything needed to draw a stack of nested boxes.
#[derive(Debug, Clone, Default)]
pub struct Nest {
    pub depth: usize,
    pub levels: LevelLists,
    pub glyphs: GlyphSet,
    pub padding: Padding,
    /// Color for the original text, applied by the innermost layer only
    pub content_color: Option<Color>,
}

impl Nest {
    /// Resolve the attributes of every level, outermost first.
    ///
    /// With a theme, every border color comes from the theme and the
    /// border color list is ignored.
    pub fn layers(&self, mut theme: Option<&mut ColorTheme>) -> Vec<Layer> {
        (0..self.depth)
            .map(|i| {
                let border_color = match theme.as_deref_mut() {
                    Some(theme) => Some(theme.next_color()),
                    None => resolve(&self.levels.border_colors, i).copied().flatten(),
                };
                Layer {
                    border_color,
                    title: resolve(&self.levels.titles, i).cloned().unwrap_or_default(),
                    title_color: resolve(&self.levels.title_colors, i).copied().flatten(),
                    content_color: if i + 1 == self.depth {
                        self.content_color
                    } else {
                        None
                    },
                }
            })
            .collect()
    }

    /// Draw the nested boxes around `lines`. Depth 0 returns the input.
    pub fn apply(&self, lines: Vec<String>, theme: Option<&mut ColorTheme>) -> Vec<String> {
        let layers = self.layers(theme);
        debug!(depth = self.depth, lines = lines.len(), "nesting boxes");

        layers.iter().rev().fold(lines, |inner, layer| {
            render(&inner, layer, &self.glyphs, self.padding)
        })
    }
}
