//! Docs command handler

use anyhow::{Context, Result};
use std::io::{self, Write};

use nestbox::cli::{render_man_page, DocFormat};

/// Write the requested documentation to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(format: DocFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        DocFormat::Man => render_man_page(&mut out).context("Failed to render man page")?,
    }
    out.flush()?;
    Ok(())
}
