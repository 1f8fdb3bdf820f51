//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and YAML snippets to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::ROS_FUERTE);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::should_skip_network_tests;
    pub use super::TestFixture;
}

/// Name of the workspace file used by fixtures.
pub const CONFIG_FILENAME: &str = ".rosinstall";

/// Common workspace YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// A typical workspace mixing checkouts, setup files and plain folders.
    pub const ROS_FUERTE: &str = r#"
- setup-file: {local-name: /opt/ros/fuerte/setup.sh}
- other: {local-name: /opt/ros/fuerte/share/ros}
- hg:
    local-name: common_rosdeps
    uri: https://kforge.ros.org/common/rosdepcore
    version: common_rosdeps-1.0.2
- git: {local-name: ros_tutorials, uri: https://github.com/ros/ros_tutorials.git}
"#;

    /// A nested workspace whose checkouts should be absorbed as folders.
    pub const NESTED: &str = r#"
- svn: {local-name: stack, uri: https://svn.example.com/stack/trunk}
- bzr: {local-name: ../sibling, uri: lp:sibling}
"#;

    /// An element missing its uri.
    pub const MISSING_URI: &str = "- git: {local-name: ros}\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "- git: {local-name: [unclosed\n";

    /// Empty workspace (comments only).
    pub const EMPTY: &str = "# nothing here yet\n";
}

/// Check if network tests should be skipped.
///
/// Returns `true` if the `SKIP_NETWORK_TESTS` environment variable is set.
#[allow(dead_code)]
pub fn should_skip_network_tests() -> bool {
    env::var("SKIP_NETWORK_TESTS").is_ok()
}

/// A test fixture that provides a temporary workspace directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a workspace file with the given content at the fixture root.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(CONFIG_FILENAME, content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add an empty directory.
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The fixture directory as a string.
    pub fn dir(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// A path inside the fixture as a string.
    pub fn child_str(&self, path: &str) -> String {
        self.path().join(path).to_string_lossy().into_owned()
    }

    /// Get the path to the workspace file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(CONFIG_FILENAME)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
