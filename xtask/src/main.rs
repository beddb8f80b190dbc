//! xtask - Build tasks for box
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate the man page into docs/man/box.1

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nestbox::cli::render_man_page;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for box")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs { output } => generate_man_page(&output),
    }
}

/// Generate the man page using clap_mangen
fn generate_man_page(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let mut buffer = Vec::new();
    render_man_page(&mut buffer)?;
    let path = man_dir.join("box.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}
