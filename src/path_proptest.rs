//! Property-based tests for path handling and element invariants.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::aggregate::rewrite_included;
    use crate::legacy::{decode, legacy_yaml};
    use crate::path::{norm_abspath, normalize};
    use crate::path_spec::{LegacyType, PathSpec, ScmType};
    use proptest::prelude::*;
    use std::path::{Component, Path};

    fn segment() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => "[a-z][a-z0-9_]{0,7}",
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
        ]
    }

    fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 1..6).prop_map(|parts| parts.join("/"))
    }

    fn scm_type() -> impl Strategy<Value = ScmType> {
        prop::sample::select(ScmType::ALL.to_vec())
    }

    fn scalar() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_./-]{0,15}"
    }

    fn decodable_spec() -> impl Strategy<Value = PathSpec> {
        prop_oneof![
            relative_path().prop_map(PathSpec::new),
            relative_path().prop_map(PathSpec::setup_file),
            (relative_path(), scm_type(), scalar(), prop::option::of(scalar())).prop_map(
                |(name, scm, uri, version)| {
                    let builder = PathSpec::builder(name).scm(scm, uri);
                    match version {
                        Some(version) => builder.version(version).build(),
                        None => builder.build(),
                    }
                }
            ),
        ]
    }

    // ============================================================================
    // normalize property tests
    // ============================================================================

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(path in relative_path()) {
            let once = normalize(Path::new(&path));
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: normalized absolute paths contain no `.` or `..` components
        #[test]
        fn normalize_absolute_has_no_dot_components(path in relative_path()) {
            let absolute = format!("/{}", path);
            let normalized = normalize(Path::new(&absolute));
            prop_assert!(normalized.is_absolute());
            for component in normalized.components() {
                prop_assert!(
                    !matches!(component, Component::CurDir | Component::ParentDir),
                    "{:?} kept a dot component",
                    normalized
                );
            }
        }

        /// Property: re-rooting never leaves the result relative
        #[test]
        fn norm_abspath_under_absolute_base_is_absolute(path in relative_path()) {
            let rooted = norm_abspath(&path, Some("/ws/sub"));
            prop_assert!(Path::new(&rooted).is_absolute());
        }
    }

    // ============================================================================
    // element property tests
    // ============================================================================

    proptest! {
        /// Property: decoding the serialized form gives back the same element
        #[test]
        fn legacy_yaml_round_trips(spec in decodable_spec()) {
            let decoded = decode(&legacy_yaml(&spec)).unwrap();
            prop_assert_eq!(decoded, spec);
        }

        /// Property: detaching twice equals detaching once
        #[test]
        fn detach_is_idempotent(spec in decodable_spec()) {
            let once = spec.clone().detached();
            let twice = once.clone().detached();
            prop_assert_eq!(&once, &twice);
            let expected = if spec.legacy_type() == LegacyType::SetupFile {
                LegacyType::SetupFile
            } else {
                LegacyType::Other
            };
            prop_assert_eq!(once.legacy_type(), expected);
        }

        /// Property: rewriting keeps length and order and strips every binding
        #[test]
        fn rewrite_preserves_order(specs in prop::collection::vec(decodable_spec(), 0..8)) {
            let rewritten = rewrite_included(specs.clone(), "/ws/sub", false);
            prop_assert_eq!(rewritten.len(), specs.len());
            for (before, after) in specs.iter().zip(&rewritten) {
                prop_assert_eq!(after.scm_type(), None);
                prop_assert_eq!(after.uri(), None);
                prop_assert_eq!(after.version(), None);
                prop_assert_eq!(
                    after.local_name(),
                    norm_abspath(before.local_name(), Some("/ws/sub"))
                );
            }
        }
    }
}
