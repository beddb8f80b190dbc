//! Invocation configuration
//!
//! Turns parsed [`DrawArgs`] into a validated [`Config`]: comma lists are
//! split and length-checked against the nesting depth, color names are
//! resolved, and the color policy is applied. Nothing is read from or
//! written to disk.

use tracing::debug;

use crate::cli::{ColorWhen, DrawArgs};
use crate::color::Color;
use crate::error::BoxError;
use crate::nest::{LevelLists, Nest};
use crate::palette::{ColorTheme, ThemeFamily};
use crate::render::Padding;

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub nest: Nest,
    /// Color theme family, `None` when unset or when colors are off
    pub mode: Option<ThemeFamily>,
}

impl Config {
    /// Build the configuration, failing on list length mismatches.
    ///
    /// With `colors` false every color attribute is dropped, so the
    /// output contains no escape sequences.
    pub fn from_args(args: &DrawArgs, colors: bool) -> Result<Self, BoxError> {
        let depth = args.number;

        let titles = split_list(args.title.as_deref());
        let border_colors = split_list(args.box_color.as_deref());
        let title_colors = split_list(args.title_color.as_deref());

        validate_list("-t/--title", titles.len(), depth)?;
        validate_list("-b/--box-color", border_colors.len(), depth)?;
        validate_list("-c/--title-color", title_colors.len(), depth)?;

        let parse_all = |names: Vec<String>| -> Vec<Option<Color>> {
            if colors {
                names.iter().map(|n| Color::parse(n)).collect()
            } else {
                Vec::new()
            }
        };

        let content_color = if colors {
            args.center_color.as_deref().and_then(Color::parse)
        } else {
            None
        };

        let config = Config {
            nest: Nest {
                depth,
                levels: LevelLists {
                    border_colors: parse_all(border_colors),
                    title_colors: parse_all(title_colors),
                    titles,
                },
                glyphs: args.theme.glyphs(),
                padding: Padding::new(args.vpadding, args.hpadding),
                content_color,
            },
            mode: args.mode.filter(|_| colors),
        };
        debug!(depth, mode = ?config.mode, colors, "configuration resolved");
        Ok(config)
    }

    /// A fresh color theme for this run, if a mode is active.
    pub fn color_theme(&self) -> Option<ColorTheme> {
        self.mode.map(ColorTheme::new)
    }
}

/// Split a comma-separated flag value. An absent or empty flag is an empty
/// list; empty items between commas are kept.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        None | Some("") => Vec::new(),
        Some(v) => v.split(',').map(str::to_string).collect(),
    }
}

/// A list must be empty, hold a single value, or hold one value per level.
pub fn validate_list(flag: &'static str, len: usize, depth: usize) -> Result<(), BoxError> {
    if len == 0 || len == 1 || len == depth {
        return Ok(());
    }
    Err(BoxError::ListLength {
        flag,
        depth,
        got: len,
    })
}

/// Decide whether to emit ANSI colors.
pub fn colors_enabled(when: ColorWhen) -> bool {
    let env_set = |name: &str| std::env::var_os(name).is_some_and(|v| !v.is_empty());
    decide_colors(
        when,
        env_set("NO_COLOR"),
        env_set("FORCE_COLOR"),
        atty::is(atty::Stream::Stdout),
    )
}

/// NO_COLOR beats FORCE_COLOR, which beats terminal detection. Explicit
/// `always`/`never` beat everything.
pub fn decide_colors(when: ColorWhen, no_color: bool, force_color: bool, is_tty: bool) -> bool {
    match when {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => !no_color && (force_color || is_tty),
    }
}
