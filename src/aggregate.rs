//! # Aggregation
//!
//! Builds the single ordered list of workspace elements from a workspace's
//! own config file and any number of source locations.
//!
//! ## Process
//!
//! 1.  **Seed**: if `base_path/filename` exists, its elements come first,
//!     unmodified.
//! 2.  **Sources**: each location is resolved with
//!     [`SourceLoader::list_from_uri`] in declaration order, and all of its
//!     elements are appended. Directories holding a workspace file are
//!     rewritten with [`rewrite_included`].
//! 3.  **Result**: the plain concatenation. Elements sharing a local name
//!     are all kept, so a consumer applying "last one wins" gets the
//!     element from the latest declared source.
//!
//! The first error aborts the whole aggregation. It is returned wrapped in
//! [`Error::Location`](crate::error::Error::Location) naming the source.

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::loader::SourceLoader;
use crate::path::norm_abspath;
use crate::path_spec::PathSpec;

/// Rewrite the elements of a workspace file found in `source_dir` so they
/// can be spliced into another workspace.
///
/// Every element loses its version-control binding. Unless `as_is` is set,
/// each local name is re-rooted under `source_dir` (absolute names are
/// only normalized). Order is preserved.
pub fn rewrite_included(specs: Vec<PathSpec>, source_dir: &str, as_is: bool) -> Vec<PathSpec> {
    specs
        .into_iter()
        .map(|spec| {
            let local_name = if as_is {
                spec.local_name().to_string()
            } else {
                norm_abspath(spec.local_name(), Some(source_dir))
            };
            debug!(
                "Rewriting included element {} as {}",
                spec.local_name(),
                local_name
            );
            spec.detached().with_path(local_name)
        })
        .collect()
}

/// Build the merged element list.
///
/// `filename` is the workspace file name looked up in `base_path` and in
/// every directory source. `base_path` is the workspace the list is for.
pub fn aggregate<S: AsRef<str>>(
    loader: &SourceLoader,
    sources: &[S],
    filename: Option<&str>,
    base_path: Option<&str>,
) -> Result<Vec<PathSpec>> {
    let mut specs = Vec::new();

    if let (Some(filename), Some(base_path)) = (filename, base_path) {
        let own_config = Path::new(base_path).join(filename);
        if own_config.is_file() {
            let own_config = own_config.to_string_lossy().into_owned();
            let existing = loader
                .list_from_uri(&own_config, None, true)
                .map_err(|e| e.at(own_config.as_str()))?;
            debug!(
                "Seeded {} element(s) from existing {}",
                existing.len(),
                own_config
            );
            specs.extend(existing);
        }
    }

    for source in sources {
        let source = source.as_ref();
        let resolved = loader
            .list_from_uri(source, filename, false)
            .map_err(|e| e.at(source))?;
        debug!("Resolved {} element(s) from {}", resolved.len(), source);
        specs.extend(resolved);
    }

    Ok(specs)
}
