//! Path manipulation utilities for workspace locations
//!
//! Locations handed to the aggregator are either filesystem paths or remote
//! URIs. These helpers turn local paths into canonical absolute form while
//! passing remote URIs through untouched. All normalization is lexical: the
//! filesystem is never consulted, so symlinks are not resolved and paths
//! that do not exist yet are handled the same way as existing ones.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Returns true if `location` carries a URI scheme such as `https:` or `file:`.
///
/// Single-letter schemes are treated as Windows drive letters, not schemes.
pub fn has_scheme(location: &str) -> bool {
    match url::Url::parse(location) {
        Ok(url) => url.scheme().len() > 1,
        Err(_) => false,
    }
}

/// Lexically normalize a path.
///
/// Removes `.` components, folds `name/..` pairs and drops `..` directly
/// under the root. Leading `..` components of a relative path are kept.
/// An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Make a location absolute if it is a local path.
///
/// Locations with a URI scheme are returned unchanged. Anything else is
/// joined onto the current working directory (when relative) and
/// normalized.
pub fn conditional_abspath(location: &str) -> Result<String> {
    if has_scheme(location) {
        return Ok(location.to_string());
    }
    let path = Path::new(location);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&absolute).to_string_lossy().into_owned())
}

/// Re-root a local name under `base_path`.
///
/// If `local_name` is absolute, or there is no base path, returns the
/// normalized `local_name`. Otherwise returns the normalized join of
/// `base_path` and `local_name`.
pub fn norm_abspath(local_name: &str, base_path: Option<&str>) -> String {
    let local = Path::new(local_name);
    let joined = match base_path {
        Some(base) if !local.is_absolute() => Path::new(base).join(local),
        _ => local.to_path_buf(),
    };
    normalize(&joined).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com/ws.rosinstall"));
        assert!(has_scheme("file:///tmp/ws.rosinstall"));
        assert!(!has_scheme("/tmp/ws.rosinstall"));
        assert!(!has_scheme("relative/ws.rosinstall"));
        assert!(!has_scheme("git@github.com:user/repo.git"));
        assert!(!has_scheme("C:\\ws\\ws.rosinstall"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("a//b/")), PathBuf::from("a/b"));
        assert_eq!(normalize(Path::new("../a/../../b")), PathBuf::from("../../b"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("")), PathBuf::from("."));
    }

    #[test]
    fn test_conditional_abspath_passes_uris_through() {
        let uri = "https://example.com/ws/../x.rosinstall";
        assert_eq!(conditional_abspath(uri).unwrap(), uri);
    }

    #[test]
    fn test_conditional_abspath_absolute() {
        assert_eq!(conditional_abspath("/ws/./sub/../pkg").unwrap(), "/ws/pkg");
    }

    #[test]
    fn test_conditional_abspath_relative_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let expected = normalize(&cwd.join("pkg"));
        assert_eq!(
            conditional_abspath("./pkg").unwrap(),
            expected.to_string_lossy()
        );
    }

    #[test]
    fn test_norm_abspath() {
        assert_eq!(norm_abspath("pkg", Some("/ws/sub")), "/ws/sub/pkg");
        assert_eq!(norm_abspath("../pkg", Some("/ws/sub")), "/ws/pkg");
        assert_eq!(norm_abspath("/opt/ros/./share", Some("/ws")), "/opt/ros/share");
        assert_eq!(norm_abspath("a/./b", None), "a/b");
    }
}
