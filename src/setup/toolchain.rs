//! Minimum toolchain check.

use semver::Version;

use super::SetupError;

/// Check that the compiler version `found` is at least `minimum`.
///
/// Pre-release and build metadata on `found` are ignored, so a
/// `1.85.0-nightly` compiler satisfies a `1.85.0` minimum.
pub fn check_toolchain(found: &str, minimum: &str) -> Result<Version, SetupError> {
    let unsupported = || SetupError::UnsupportedToolchain {
        found: found.to_string(),
        minimum: minimum.to_string(),
    };

    let parsed = Version::parse(found.trim()).map_err(|_| unsupported())?;
    let found_release = Version::new(parsed.major, parsed.minor, parsed.patch);
    let min = Version::parse(minimum).map_err(|_| unsupported())?;

    if found_release < min {
        return Err(unsupported());
    }
    Ok(found_release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_equal_and_newer() {
        assert_eq!(check_toolchain("1.85.0", "1.85.0").unwrap(), Version::new(1, 85, 0));
        assert!(check_toolchain("1.90.1", "1.85.0").is_ok());
        assert!(check_toolchain("2.0.0", "1.85.0").is_ok());
    }

    #[test]
    fn rejects_older() {
        let err = check_toolchain("1.84.1", "1.85.0").unwrap_err();
        assert!(matches!(err, SetupError::UnsupportedToolchain { .. }));
        let msg = err.to_string();
        assert!(msg.contains("1.84.1"));
        assert!(msg.contains("1.85.0"));
    }

    #[test]
    fn ignores_prerelease_suffix() {
        assert_eq!(
            check_toolchain("1.85.0-nightly", "1.85.0").unwrap(),
            Version::new(1, 85, 0)
        );
        assert!(check_toolchain("1.84.0-beta.3", "1.85.0").is_err());
    }

    #[test]
    fn unparseable_version_is_unsupported() {
        let err = check_toolchain("unknown", "1.85.0").unwrap_err();
        assert!(matches!(err, SetupError::UnsupportedToolchain { .. }));
    }

    #[test]
    fn build_toolchain_meets_minimum() {
        let found = crate::constants::RUSTC_VERSION;
        // build.rs falls back to "unknown" when rustc cannot be queried.
        if found != "unknown" {
            assert!(check_toolchain(found, crate::constants::MIN_RUST_VERSION).is_ok());
        }
    }
}
