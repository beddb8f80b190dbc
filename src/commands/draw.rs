//! Draw command handler (the default command)

use anyhow::Result;
use clap::CommandFactory;
use std::io::{self, BufWriter, Write};
use tracing::debug;

use nestbox::cli::DrawArgs;
use nestbox::config::{colors_enabled, Config};
use nestbox::{input, BoxError};

/// Resolve configuration and input, then print the nested boxes.
///
/// Every error is raised before the first line is written.
pub fn handle<C: CommandFactory>(args: &DrawArgs) -> Result<()> {
    let config = Config::from_args(args, colors_enabled(args.color))?;

    let lines = match input::resolve_text_input(&args.text) {
        Ok(lines) => lines,
        Err(BoxError::NoInput) => {
            eprintln!("{}", C::command().render_usage());
            eprintln!();
            return Err(BoxError::NoInput.into());
        }
        Err(e) => return Err(e.into()),
    };

    let mut theme = config.color_theme();
    let output = config.nest.apply(lines, theme.as_mut());
    debug!(lines = output.len(), "writing output");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &output {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
