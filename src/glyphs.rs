//! Border glyph sets
//!
//! A glyph set maps the six border positions of a box to one character
//! each. All glyphs are exactly one column wide.

use clap::ValueEnum;

/// The six characters used to draw a box border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Horizontal edge (west-east)
    pub we: char,
    /// Vertical edge (north-south)
    pub ns: char,
    /// Top-left corner
    pub nw: char,
    /// Top-right corner
    pub ne: char,
    /// Bottom-left corner
    pub sw: char,
    /// Bottom-right corner
    pub se: char,
}

impl GlyphSet {
    /// Heavy box-drawing characters.
    pub const UNICODE: GlyphSet = GlyphSet {
        we: '━',
        ns: '┃',
        nw: '┏',
        ne: '┓',
        sw: '┗',
        se: '┛',
    };

    pub const ASCII: GlyphSet = GlyphSet {
        we: '-',
        ns: '|',
        nw: '+',
        ne: '+',
        sw: '+',
        se: '+',
    };

    /// Invisible border: every position is a space.
    pub const PLAIN: GlyphSet = GlyphSet {
        we: ' ',
        ns: ' ',
        nw: ' ',
        ne: ' ',
        sw: ' ',
        se: ' ',
    };
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Theme names accepted by `--theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeName {
    #[default]
    Unicode,
    Ascii,
    Plain,
}

impl ThemeName {
    pub fn glyphs(self) -> GlyphSet {
        match self {
            ThemeName::Unicode => GlyphSet::UNICODE,
            ThemeName::Ascii => GlyphSet::ASCII,
            ThemeName::Plain => GlyphSet::PLAIN,
        }
    }
}
