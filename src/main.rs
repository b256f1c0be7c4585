//! makedoc: help output for documented makefile targets.
//!
//! Targets are documented with `##` comment blocks placed directly above
//! their declaration:
//!
//! ```make
//! ## Build the release binary
//! ##
//! ## Longer paragraphs end up in --verbose output.
//! build:
//! 	cargo build --release
//! ```
//!
//! `makedoc Makefile` lists every documented target with the first
//! paragraph of its block, sorted by name. The declared `.DEFAULT_GOAL`
//! gets its own highlight under `--pretty`.

mod docs;
mod goal;
mod model;
mod parser;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "makedoc",
    about = "Show help output for documented makefile targets"
)]
struct Cli {
    /// Makefiles to read, in order; later files win on name clashes
    files: Vec<PathBuf>,

    /// Only show documentation for the given target
    #[arg(short = 't', long)]
    target: Option<String>,

    /// Also show long descriptions
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Colorize the output
    #[arg(short = 'p', long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        bail!("no makefiles provided for parsing");
    }

    let all = docs::load(&cli.files).context("failed to load makefiles")?;

    let selected: Vec<&model::DocElement> = match cli.target.as_deref() {
        Some(name) => {
            let element = all
                .get(name)
                .with_context(|| format!("target {} doesn't exist", name))?;
            vec![element]
        }
        None => all.values().collect(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for element in selected {
        out.write_all(render::render(element, cli.verbose, cli.pretty).as_bytes())
            .context("failed to write help output")?;
    }
    out.flush().context("failed to flush help output")?;

    Ok(())
}
