//! CLI definitions for box
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::io::{self, Write};
use std::sync::OnceLock;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::builder::RangedU64ValueParser;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

use crate::glyphs::ThemeName;
use crate::palette::ThemeFamily;

/// Build clap styles.
///
/// - Green: headers, usage, literals
/// - White: placeholders and valid values
/// - Red: errors
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string shown by `--version`, with the git SHA for dev builds.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() && sha != "unknown" => {
            format!("{} ({})", env!("CARGO_PKG_VERSION"), sha)
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Largest accepted `--vpadding` / `--hpadding`.
pub const MAX_PADDING: u64 = 1024;

fn padding_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(0..=MAX_PADDING)
}

#[derive(Parser, Debug)]
#[command(name = "box")]
#[command(about = "Create box around text")]
#[command(
    long_about = "Box is a CLI tool for creating text boxes in the terminal.
It supports various themes, colors, and nested boxes.

Text is read from stdin when it is piped, otherwise from the arguments.
Inside an argument, a literal \\n starts a new line.

EXAMPLES:
    echo \"Hello, world!\" | box -t \"My Title\"
    echo \"Hello, world!\" | box -t \"My Title\" -b red -c blue -n 2
    box \"Hello, world!\" -t \"My Title\"
    box \"Line 1\" \"Line 2\" \"Line 3\"
    box -n 6 -m pride \"Nested\"

LISTS:
    --title, --box-color and --title-color take comma-separated lists.
    A list holds either one value (used for every box) or exactly one
    value per box, outermost first."
)]
#[command(version, long_version = long_version())]
#[command(styles = build_cli_styles())]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub draw: DrawArgs,
}

/// Options for drawing boxes (the default command).
#[derive(Args, Debug, Clone)]
pub struct DrawArgs {
    /// Text lines to box (ignored when stdin is piped)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Number of nested boxes
    #[arg(short = 'n', long, default_value_t = 1)]
    pub number: usize,

    /// Box titles (comma-separated)
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Box border colors (comma-separated)
    #[arg(short = 'b', long)]
    pub box_color: Option<String>,

    /// Title colors (comma-separated)
    #[arg(short = 'c', long)]
    pub title_color: Option<String>,

    /// Center text color (innermost box only)
    #[arg(short = 'C', long)]
    pub center_color: Option<String>,

    /// Vertical padding
    #[arg(short = 'v', long, default_value_t = 0, value_parser = padding_parser())]
    pub vpadding: usize,

    /// Horizontal padding
    #[arg(short = 'H', long, default_value_t = 0, value_parser = padding_parser())]
    pub hpadding: usize,

    /// Border glyph theme
    #[arg(short = 'T', long, value_enum, default_value_t = ThemeName::Unicode)]
    pub theme: ThemeName,

    /// Color mode for border colors (overrides --box-color)
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<ThemeFamily>,

    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,
}

/// ANSI color emission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorWhen {
    /// Color unless NO_COLOR is set or stdout is not a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    #[command(
        hide = true,
        long_about = "Generate shell completions for bash, zsh, fish, elvish or powershell."
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },

    /// Generate documentation
    #[command(hide = true)]
    Docs {
        /// Documentation format
        #[arg(value_enum)]
        format: DocFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    /// roff man page
    Man,
}

/// Render the man page for the whole CLI.
pub fn render_man_page<W: Write>(out: &mut W) -> io::Result<()> {
    let man = clap_mangen::Man::new(Cli::command())
        .title("BOX")
        .section("1")
        .source(concat!("Box Version ", env!("CARGO_PKG_VERSION")))
        .manual("User Commands");
    man.render(out)
}
