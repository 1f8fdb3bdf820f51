//! # Path Spec
//!
//! A `PathSpec` is the uniform in-memory form of one workspace element: a
//! local path, optionally bound to a version-control source. Every legacy
//! YAML shorthand decodes to this one type (see [`crate::legacy`]) and the
//! rest of the crate works only with `PathSpec` values.
//!
//! ## Invariants
//!
//! - `local_name` is never empty.
//! - Without an `scm_type`, the `uri`, `version`, `revision` and
//!   `current_revision` fields are all unset.
//! - With an `scm_type`, `uri` is set.
//!
//! Decoding from YAML enforces these. Values built programmatically with
//! [`PathSpec::new`] or [`PathSpec::builder`] are trusted.
//!
//! After construction only two changes are possible: dropping the
//! version-control binding ([`PathSpec::detach_vcs_info`]) and re-rooting
//! the local name ([`PathSpec::set_path`]). Both have consuming
//! counterparts (`detached`, `with_path`) used by the rewrite transform.

use std::collections::BTreeSet;
use std::fmt;

/// Tag marking an element as a sourced shell-setup file.
pub const SETUP_FILE_TAG: &str = "setup-file";

/// Supported version-control systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScmType {
    Svn,
    Bzr,
    Hg,
    Git,
}

impl ScmType {
    /// All version-control systems, in legacy declaration order.
    pub const ALL: [ScmType; 4] = [ScmType::Svn, ScmType::Bzr, ScmType::Hg, ScmType::Git];

    /// The legacy YAML key for this system.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScmType::Svn => "svn",
            ScmType::Bzr => "bzr",
            ScmType::Hg => "hg",
            ScmType::Git => "git",
        }
    }
}

impl fmt::Display for ScmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display category of a path spec, used as its legacy YAML key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyType {
    Scm(ScmType),
    SetupFile,
    Other,
}

impl LegacyType {
    /// All recognized legacy keys.
    pub const ALL: [LegacyType; 6] = [
        LegacyType::Scm(ScmType::Svn),
        LegacyType::Scm(ScmType::Bzr),
        LegacyType::Scm(ScmType::Hg),
        LegacyType::Scm(ScmType::Git),
        LegacyType::Other,
        LegacyType::SetupFile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyType::Scm(scm) => scm.as_str(),
            LegacyType::SetupFile => SETUP_FILE_TAG,
            LegacyType::Other => "other",
        }
    }

    /// Look up a legacy key. Returns `None` for anything unrecognized.
    pub fn from_key(key: &str) -> Option<Self> {
        LegacyType::ALL.into_iter().find(|t| t.as_str() == key)
    }
}

impl fmt::Display for LegacyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One workspace element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    local_name: String,
    scm_type: Option<ScmType>,
    uri: Option<String>,
    version: Option<String>,
    revision: Option<String>,
    current_revision: Option<String>,
    tags: BTreeSet<String>,
}

impl PathSpec {
    /// A plain folder element with no version-control binding.
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            scm_type: None,
            uri: None,
            version: None,
            revision: None,
            current_revision: None,
            tags: BTreeSet::new(),
        }
    }

    /// A version-controlled checkout of `uri` at `local_name`.
    pub fn scm(local_name: impl Into<String>, scm_type: ScmType, uri: impl Into<String>) -> Self {
        Self::builder(local_name).scm(scm_type, uri).build()
    }

    /// A sourced shell-setup file reference.
    pub fn setup_file(local_name: impl Into<String>) -> Self {
        Self::builder(local_name).tag(SETUP_FILE_TAG).build()
    }

    pub fn builder(local_name: impl Into<String>) -> PathSpecBuilder {
        PathSpecBuilder {
            spec: Self::new(local_name),
        }
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn scm_type(&self) -> Option<ScmType> {
        self.scm_type
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn current_revision(&self) -> Option<&str> {
        self.current_revision.as_deref()
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The category this element serializes under.
    pub fn legacy_type(&self) -> LegacyType {
        match self.scm_type {
            Some(scm) => LegacyType::Scm(scm),
            None if self.has_tag(SETUP_FILE_TAG) => LegacyType::SetupFile,
            None => LegacyType::Other,
        }
    }

    /// Drop the version-control binding, turning the element into a plain
    /// folder. Tags are kept.
    pub fn detach_vcs_info(&mut self) {
        self.scm_type = None;
        self.uri = None;
        self.version = None;
        self.revision = None;
        self.current_revision = None;
    }

    /// Replace the local name.
    pub fn set_path(&mut self, local_name: impl Into<String>) {
        self.local_name = local_name.into();
    }

    /// Consuming form of [`detach_vcs_info`](Self::detach_vcs_info).
    pub fn detached(mut self) -> Self {
        self.detach_vcs_info();
        self
    }

    /// Consuming form of [`set_path`](Self::set_path).
    pub fn with_path(mut self, local_name: impl Into<String>) -> Self {
        self.set_path(local_name);
        self
    }

    /// True if both elements point at the same source.
    ///
    /// Compares `scm_type`, `uri` and `version`; pinned and observed
    /// revisions are ignored.
    pub fn same_binding(&self, other: &PathSpec) -> bool {
        self.scm_type == other.scm_type && self.uri == other.uri && self.version == other.version
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {{local-name: {}", self.legacy_type(), self.local_name)?;
        if self.scm_type.is_some() {
            let optional = [
                ("uri", &self.uri),
                ("version", &self.version),
                ("revision", &self.revision),
                ("current_revision", &self.current_revision),
            ];
            for (key, value) in optional {
                if let Some(value) = value {
                    write!(f, ", {}: {}", key, value)?;
                }
            }
        }
        f.write_str("}}")
    }
}

/// Incremental construction of a [`PathSpec`]
#[derive(Debug, Clone)]
pub struct PathSpecBuilder {
    spec: PathSpec,
}

impl PathSpecBuilder {
    pub fn scm(mut self, scm_type: ScmType, uri: impl Into<String>) -> Self {
        self.spec.scm_type = Some(scm_type);
        self.spec.uri = Some(uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.spec.version = Some(version.into());
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.spec.revision = Some(revision.into());
        self
    }

    pub fn current_revision(mut self, current_revision: impl Into<String>) -> Self {
        self.spec.current_revision = Some(current_revision.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.spec.tags.insert(tag.into());
        self
    }

    pub fn build(self) -> PathSpec {
        self.spec
    }
}
