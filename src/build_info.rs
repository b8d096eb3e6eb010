//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line engine identifier printed by the simulator banner.
pub fn version_string() -> String {
    format!("primal-path {} ({} {})", ENGINE_VERSION, BUILD_COMMIT, BUILD_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
        assert!(!ENGINE_VERSION.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_string_mentions_commit() {
        let v = version_string();
        assert!(v.starts_with("primal-path "));
        assert!(v.contains(BUILD_COMMIT));
    }
}
