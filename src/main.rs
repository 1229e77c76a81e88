//! Notewrite - writes the bundled note into the vault.
//!
//! # Usage
//!
//! ```bash
//! notewrite
//! RUST_LOG=notewrite=debug notewrite
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use notewrite::note::Note;
use notewrite::writer::write_note;

/// Writes the bundled knowledge-base note to its vault location
#[derive(Parser, Debug)]
#[command(name = "notewrite", version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    Cli::parse();

    let note = Note::bundled();
    let written = write_note(&note).context("Could not save note")?;
    println!("{}", written.confirmation());
    Ok(())
}
