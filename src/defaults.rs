//! Default values for workspace configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Name of the workspace file inside a workspace directory.
///
/// Can be overridden by the `--filename` CLI flag or the
/// `MULTIPROJECT_FILENAME` environment variable.
pub const DEFAULT_CONFIG_FILENAME: &str = ".rosinstall";

/// Header written above generated workspace files.
pub const GENERATED_HEADER: &str = "# IT IS UNLIKELY YOU WANT TO EDIT THIS FILE BY HAND,\n\
# UNLESS FOR REMOVING ENTRIES.\n\
# THIS IS A FILE GENERATED BY multiproject\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_header_is_yaml_comment() {
        assert!(GENERATED_HEADER.ends_with('\n'));
        for line in GENERATED_HEADER.lines() {
            assert!(line.starts_with('#'), "not a comment: {}", line);
        }
    }
}
