//! # Source Loader
//!
//! Resolves one source location into workspace elements. A location is a
//! local file, a directory, or a remote URI:
//!
//! - A **file** is parsed as a workspace document.
//! - A **directory** holding the workspace file name is resolved through
//!   that file, with its elements rewritten relative to the directory (see
//!   [`crate::aggregate::rewrite_included`]).
//! - Any other **directory** becomes a single plain folder element.
//! - Anything else is downloaded through a [`Fetcher`] and parsed.
//!
//! ## Design
//!
//! Downloads go through the `Fetcher` trait so that tests can substitute an
//! in-memory implementation. `HttpFetcher` is the default and performs a
//! blocking GET with `ureq`; there is no retry and no timeout beyond what
//! `ureq` applies itself.

use std::io;
use std::path::Path;

use log::debug;
use serde_yaml::Value;

use crate::aggregate::rewrite_included;
use crate::error::{Error, Result};
use crate::legacy;
use crate::path_spec::PathSpec;

/// Trait for downloading remote documents - allows mocking in tests
pub trait Fetcher: Send + Sync {
    /// Download the document at `uri` and return its body.
    fn fetch(&self, uri: &str) -> Result<String>;
}

/// Default fetcher: `file://` URIs are read from disk, everything else is
/// requested over HTTP(S).
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, uri: &str) -> Result<String> {
        let url = url::Url::parse(uri).map_err(|e| Error::Fetch {
            uri: uri.to_string(),
            message: format!("not a valid URL: {}", e),
        })?;

        if url.scheme() == "file" {
            let path = url.to_file_path().map_err(|_| Error::Fetch {
                uri: uri.to_string(),
                message: "file URL has no local path".to_string(),
            })?;
            return std::fs::read_to_string(&path).map_err(|e| Error::Fetch {
                uri: uri.to_string(),
                message: e.to_string(),
            });
        }

        let response = ureq::get(url.as_str()).call().map_err(|e| Error::Fetch {
            uri: uri.to_string(),
            message: e.to_string(),
        })?;
        response.into_string().map_err(|e| Error::Fetch {
            uri: uri.to_string(),
            message: e.to_string(),
        })
    }
}

/// Loads workspace documents and resolves locations into path specs
pub struct SourceLoader {
    fetcher: Box<dyn Fetcher>,
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLoader {
    /// Create a loader that downloads with [`HttpFetcher`].
    pub fn new() -> Self {
        Self::with_fetcher(HttpFetcher)
    }

    /// Create a loader with a custom fetcher.
    pub fn with_fetcher(fetcher: impl Fetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
        }
    }

    /// Read and parse the YAML document at `uri`.
    ///
    /// Existing local files are read from disk, anything else is fetched.
    /// Returns `Ok(None)` when the document has no content.
    pub fn load(&self, uri: &str) -> Result<Option<Value>> {
        let content = if Path::new(uri).is_file() {
            debug!("Reading workspace file {}", uri);
            std::fs::read_to_string(uri).map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => Error::Parse {
                    uri: uri.to_string(),
                    message: e.to_string(),
                },
                _ => Error::Read {
                    path: uri.to_string(),
                    message: e.to_string(),
                },
            })?
        } else {
            debug!("Fetching workspace document {}", uri);
            self.fetcher.fetch(uri)?
        };
        legacy::parse_yaml(&content, uri)
    }

    /// Resolve one location into zero or more path specs.
    ///
    /// `filename` names the workspace file looked up inside directories.
    /// With `as_is`, a directory's workspace file is returned unmodified
    /// instead of being rewritten relative to the directory.
    pub fn list_from_uri(
        &self,
        uri: &str,
        filename: Option<&str>,
        as_is: bool,
    ) -> Result<Vec<PathSpec>> {
        let location = Path::new(uri);
        if location.is_dir() {
            let nested = filename
                .map(|name| location.join(name))
                .filter(|nested| nested.is_file());
            return match nested {
                Some(nested) => {
                    let nested = nested.to_string_lossy();
                    debug!("Directory {} has workspace file {}", uri, nested);
                    let specs = self.list_from_uri(&nested, None, false)?;
                    if as_is {
                        Ok(specs)
                    } else {
                        Ok(rewrite_included(specs, uri, false))
                    }
                }
                None => {
                    debug!("Adding directory {} as a plain folder", uri);
                    Ok(vec![PathSpec::new(uri)])
                }
            };
        }

        match self.load(uri)? {
            Some(document) => legacy::decode_document(&document),
            None => Ok(Vec::new()),
        }
    }
}
