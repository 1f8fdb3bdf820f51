//! # Multiproject Workspace Library
//!
//! This library reads, merges and writes declarative workspace descriptions:
//! ordered lists of filesystem locations, each optionally bound to a
//! version-control source. It is used by the `multiproject` command-line
//! tool and can be embedded by any tool that needs the merged element list
//! of a workspace. Checking out sources is left to the consumer.
//!
//! ## Quick Example
//!
//! ```
//! use multiproject::legacy;
//! use multiproject::path_spec::{PathSpec, ScmType};
//!
//! let yaml = r#"
//! - git: {local-name: ros, uri: https://github.com/ros/ros.git, version: fuerte}
//! - setup-file: {local-name: /opt/ros/fuerte/setup.sh}
//! "#;
//! let specs = legacy::decode_str(yaml, "inline").unwrap();
//! assert_eq!(specs.len(), 2);
//! assert_eq!(specs[0].scm_type(), Some(ScmType::Git));
//! assert_eq!(specs[1], PathSpec::setup_file("/opt/ros/fuerte/setup.sh"));
//!
//! // Serializing gives back an equivalent document
//! let text = legacy::to_yaml_string(&specs).unwrap();
//! assert_eq!(legacy::decode_str(&text, "round-trip").unwrap(), specs);
//! ```
//!
//! ## Core Concepts
//!
//! - **Path Spec (`path_spec`)**: The uniform representation of one
//!   workspace element.
//! - **Legacy Shapes (`legacy`)**: Conversion between the single-key YAML
//!   shorthand and `PathSpec`, including all element validation.
//! - **Source Loader (`loader`)**: Reads local files, downloads remote
//!   documents and resolves directories into elements.
//! - **Aggregation (`aggregate`)**: Concatenates the elements of many
//!   sources in declaration order, rewriting included workspaces so they
//!   become plain folders under their own directory.
//! - **Configuration (`config`)**: The merged list rooted at a workspace
//!   directory, with duplicate reporting and file generation.

pub mod aggregate;
pub mod config;
pub mod defaults;
pub mod error;
pub mod legacy;
pub mod loader;
pub mod path;
pub mod path_spec;

#[cfg(test)]
mod path_proptest;
