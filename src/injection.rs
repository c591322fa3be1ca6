//! Names shared by `build.rs` and the library for build-time injection.
//! `build.rs` pulls this file in with `#[path]`, so it depends on std only.

/// Pipeline variable read by `build.rs`, paired with the `rustc-env` name
/// the crate reads back through `env!`.
pub const INJECTED: [(&str, &str); 4] = [
    ("VERSIONFLAG_PROJECT_NAME", "VERSIONFLAG_BUILD_PROJECT_NAME"),
    ("VERSIONFLAG_GIT_COMMIT", "VERSIONFLAG_BUILD_GIT_COMMIT"),
    ("VERSIONFLAG_BUILD_TIME", "VERSIONFLAG_BUILD_BUILD_TIME"),
    ("VERSIONFLAG_JENKINS_BUILD", "VERSIONFLAG_BUILD_JENKINS_BUILD"),
];

/// A pipeline value as it is baked in; blank counts as not injected.
pub fn injected_value(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_trimmed() {
        assert_eq!(injected_value(Some("  demo\n")), Some("demo".to_string()));
    }

    #[test]
    fn blank_and_missing_values_are_not_injected() {
        assert_eq!(injected_value(Some("   ")), None);
        assert_eq!(injected_value(None), None);
    }

    #[test]
    fn every_source_has_a_distinct_target() {
        for (source, target) in INJECTED {
            assert!(source.starts_with("VERSIONFLAG_"));
            assert!(target.starts_with("VERSIONFLAG_BUILD_"));
            assert_ne!(source, target);
        }
    }
}
