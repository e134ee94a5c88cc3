//! Build identification
//!
//! Values are captured by this crate's build script and shared by every
//! binary in the workspace; each binary supplies its own name and version.

use serde::Serialize;

pub const GIT_HASH: &str = env!("GIT_HASH");
pub const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");
pub const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

/// Identity of a running module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub module: &'static str,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    /// Pass `env!("CARGO_PKG_VERSION")` from the calling crate
    pub const fn new(module: &'static str, version: &'static str) -> Self {
        Self {
            module,
            version,
            git_hash: GIT_HASH,
            build_timestamp: BUILD_TIMESTAMP,
            build_profile: BUILD_PROFILE,
        }
    }

    /// One-line banner logged right after tracing is initialised
    pub fn banner(&self) -> String {
        format!(
            "Starting {} v{} [{}] built {} ({})",
            self.module, self.version, self.git_hash, self.build_timestamp, self.build_profile
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        let info = BuildInfo::new("rcm-test", "1.2.3");
        let banner = info.banner();

        assert!(banner.starts_with("Starting rcm-test v1.2.3 ["));
        assert!(banner.contains(GIT_HASH));
        assert!(banner.ends_with(&format!("({})", BUILD_PROFILE)));
    }

    #[test]
    fn test_build_values_are_present() {
        assert!(!GIT_HASH.is_empty());
        assert!(!BUILD_TIMESTAMP.is_empty());
        assert!(!BUILD_PROFILE.is_empty());
    }
}
