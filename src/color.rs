//! Terminal colors and ANSI emission
//!
//! Colors come from three places: the 16 named ANSI colors, a literal
//! 256-color palette index, and the generative palettes in
//! [`crate::palette`]. All of them end up as foreground SGR sequences.

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// A foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index
    Indexed(u8),
}

impl Color {
    /// Parse a user supplied color name.
    ///
    /// Accepts the standard names (case-insensitive), `gray` as an alias of
    /// `bright_black`, and integers 0-255. Anything else is `None`, which the
    /// renderer treats as "leave the text uncolored".
    pub fn parse(name: &str) -> Option<Color> {
        let name = name.trim();
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" | "bright_black" => Color::BrightBlack,
            "bright_red" => Color::BrightRed,
            "bright_green" => Color::BrightGreen,
            "bright_yellow" => Color::BrightYellow,
            "bright_blue" => Color::BrightBlue,
            "bright_magenta" => Color::BrightMagenta,
            "bright_cyan" => Color::BrightCyan,
            "bright_white" => Color::BrightWhite,
            other => return other.parse::<u8>().ok().map(Color::Indexed),
        };
        Some(color)
    }

    /// The SGR sequence selecting this color as foreground.
    pub fn fg_code(self) -> String {
        let code = match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
            Color::Indexed(n) => return format!("\x1b[38;5;{}m", n),
        };
        format!("\x1b[{}m", code)
    }

    /// Wrap text in this color followed by a reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.fg_code(), text, ANSI_RESET)
    }
}

/// Paint `text` when a color is set, otherwise return it untouched.
pub fn paint(color: Option<Color>, text: &str) -> String {
    match color {
        Some(c) => c.paint(text),
        None => text.to_string(),
    }
}
