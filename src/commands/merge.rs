//! # Merge Command Implementation
//!
//! This module implements the `merge` subcommand, which aggregates workspace
//! sources (files, directories and URLs) into a single element list.
//!
//! ## Functionality
//!
//! - **Aggregation**: The target workspace's existing file is loaded first,
//!   then every source in the order given.
//! - **Conflict Reporting**: Paths claimed by elements with different
//!   sources are logged, and rejected with `--strict`.
//! - **Output**: The merged list is printed as YAML, or written into the
//!   target workspace with `--write`.

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use multiproject::config::{generate_config_yaml, Config};
use multiproject::defaults::{DEFAULT_CONFIG_FILENAME, GENERATED_HEADER};
use multiproject::loader::SourceLoader;
use multiproject::path::conditional_abspath;

/// Merge workspace sources into one element list
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Workspace files, directories or URLs, lowest precedence first.
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// The workspace directory the merged list belongs to.
    #[arg(short, long, value_name = "DIR", default_value = ".", env = "MULTIPROJECT_TARGET")]
    pub target: PathBuf,

    /// Name of the workspace file inside workspace directories.
    #[arg(
        short,
        long,
        value_name = "NAME",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = "MULTIPROJECT_FILENAME"
    )]
    pub filename: String,

    /// Write the merged list into the target directory instead of printing it.
    #[arg(short, long)]
    pub write: bool,

    /// Fail if a path is claimed by elements with different sources.
    #[arg(long)]
    pub strict: bool,

    /// Comment text written above the list with `--write`.
    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,
}

/// Execute the `merge` command.
pub fn execute(args: MergeArgs) -> Result<()> {
    let target = conditional_abspath(&args.target.to_string_lossy())?;
    let sources = args
        .sources
        .iter()
        .map(|source| conditional_abspath(source))
        .collect::<multiproject::error::Result<Vec<_>>>()?;

    let loader = SourceLoader::new();
    let config = Config::from_sources(&loader, sources.as_slice(), &args.filename, &target)?;

    let conflicts = config.conflicts();
    if args.strict && !conflicts.is_empty() {
        let paths: Vec<&str> = conflicts.iter().map(|c| c.local_name.as_str()).collect();
        bail!(
            "Conflicting sources for {} path(s): {}",
            paths.len(),
            paths.join(", ")
        );
    }

    if args.write {
        let header = match &args.header {
            Some(text) => comment_block(text),
            None => GENERATED_HEADER.to_string(),
        };
        let written = generate_config_yaml(&config, &args.filename, Some(&header))?;
        println!(
            "Wrote {} element(s) to {}",
            config.source().len(),
            written.display()
        );
    } else {
        print!("{}", config.to_yaml_string()?);
    }
    Ok(())
}

/// Prefix every line of `text` with `# `.
fn comment_block(text: &str) -> String {
    text.lines().map(|line| format!("# {}\n", line)).collect()
}
