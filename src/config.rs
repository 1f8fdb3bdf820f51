//! # Workspace Configuration
//!
//! `Config` is the hand-off point between aggregation and the tools that act
//! on a workspace. It pairs the merged element list with the directory the
//! list is rooted at, and writes the list back out in the legacy shape.
//!
//! ## Duplicates
//!
//! The merged list may name the same local path more than once. `Config`
//! keeps every entry in order and leaves the choice of winner to its
//! consumer. [`Config::conflicts`] reports the paths whose entries disagree
//! about their version-control source, so a consumer can refuse to proceed
//! instead of silently taking the last one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::legacy;
use crate::loader::SourceLoader;
use crate::path::norm_abspath;
use crate::path_spec::PathSpec;

/// A local path claimed by several elements with different sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Normalized absolute local path.
    pub local_name: String,
    /// Every element claiming the path, in list order.
    pub elements: Vec<PathSpec>,
}

/// A merged workspace description rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    elements: Vec<PathSpec>,
    base_path: PathBuf,
}

impl Config {
    pub fn new(elements: Vec<PathSpec>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            elements,
            base_path: base_path.into(),
        }
    }

    /// Aggregate `sources` for the workspace at `base_path`.
    ///
    /// An existing `base_path/filename` seeds the list. Conflicting entries
    /// are logged as warnings but kept.
    pub fn from_sources<S: AsRef<str>>(
        loader: &SourceLoader,
        sources: &[S],
        filename: &str,
        base_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let base_path = base_path.into();
        let base = base_path.to_string_lossy().into_owned();
        let elements = aggregate(loader, sources, Some(filename), Some(base.as_str()))?;
        let config = Self::new(elements, base_path);
        for conflict in config.conflicts() {
            warn!(
                "{} entries for {} use different sources",
                conflict.elements.len(),
                conflict.local_name
            );
        }
        Ok(config)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The merged elements, in aggregation order.
    pub fn source(&self) -> &[PathSpec] {
        &self.elements
    }

    /// Alias of [`source`](Self::source).
    pub fn config_elements(&self) -> &[PathSpec] {
        self.source()
    }

    /// The absolute path an element occupies, relative names resolved
    /// against the base path.
    pub fn absolute_path(&self, spec: &PathSpec) -> String {
        let base = self.base_path.to_string_lossy();
        norm_abspath(spec.local_name(), Some(&*base))
    }

    /// Local paths claimed by more than one element where those elements
    /// do not share the same version-control binding.
    ///
    /// Conflicts are ordered by the first appearance of their path.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut groups: Vec<Conflict> = Vec::new();
        for spec in &self.elements {
            let local_name = self.absolute_path(spec);
            match groups.iter_mut().find(|g| g.local_name == local_name) {
                Some(group) => group.elements.push(spec.clone()),
                None => groups.push(Conflict {
                    local_name,
                    elements: vec![spec.clone()],
                }),
            }
        }
        groups.retain(|group| {
            group
                .elements
                .iter()
                .skip(1)
                .any(|spec| !spec.same_binding(&group.elements[0]))
        });
        groups
    }

    /// The list in its legacy YAML shape.
    pub fn to_yaml_string(&self) -> Result<String> {
        legacy::to_yaml_string(&self.elements)
    }
}

/// Write `config` to `base_path/filename`, preceded by `header`.
///
/// Creates the base directory if needed. The write is not atomic.
pub fn generate_config_yaml(
    config: &Config,
    filename: &str,
    header: Option<&str>,
) -> Result<PathBuf> {
    fs::create_dir_all(config.base_path())?;
    let target = config.base_path().join(filename);
    let mut file = fs::File::create(&target)?;
    if let Some(header) = header {
        file.write_all(header.as_bytes())?;
    }
    file.write_all(config.to_yaml_string()?.as_bytes())?;
    Ok(target)
}
