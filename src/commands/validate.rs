//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which decodes a single
//! workspace file and lists its elements without merging or writing
//! anything.

use anyhow::Result;
use clap::Args;

use multiproject::legacy;
use multiproject::loader::SourceLoader;

/// Check that a workspace file decodes
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path or URL of the workspace file to validate.
    #[arg(value_name = "FILE")]
    pub file: String,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs) -> Result<()> {
    let loader = SourceLoader::new();
    let specs = match loader.load(&args.file)? {
        Some(document) => legacy::decode_document(&document)?,
        None => Vec::new(),
    };

    println!("{}: {} element(s)", args.file, specs.len());
    for spec in &specs {
        println!("  {:<10} {}", spec.legacy_type(), spec.local_name());
    }
    Ok(())
}
