//! nestbox
//!
//! Draws nested, optionally colored borders around lines of text. The
//! `box` binary is a thin wrapper around [`Nest::apply`].

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod input;
pub mod nest;
pub mod palette;
pub mod render;
pub mod width;

pub use color::Color;
pub use config::Config;
pub use error::BoxError;
pub use glyphs::{GlyphSet, ThemeName};
pub use nest::{resolve, LevelLists, Nest};
pub use palette::{ColorTheme, ThemeFamily};
pub use render::{render, Layer, Padding};
pub use width::{display_width, strip_ansi};
