//! Global config handle.
//!
//! The record is constructed once, on first access, and shared read-only for
//! the process lifetime. There is no reload path: site identity is fixed at
//! startup.

use super::SiteConfig;
use std::sync::LazyLock;

/// Global site identity storage.
static SITE: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::resolve);

/// Access the process-wide site identity record.
#[inline]
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testenv;

    #[test]
    fn test_site_is_referentially_stable() {
        // Hold the env lock for the first touch of the static so no
        // env-mutating test runs mid-initialization.
        let _guard = testenv::lock();

        let first = site();
        let second = site();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.title, second.title);
        assert_eq!(first.domain, second.domain);
    }

    #[test]
    fn test_site_carries_literal_identity() {
        let _guard = testenv::lock();

        let site = site();
        // Domain depends on the ambient environment; the rest is the literal.
        assert_eq!(site.title, "Hedwig Blog");
        assert_eq!(site.lang, "en-US");
        assert_eq!(site.theme_color, "#3D4451");
        assert!(!site.author.bio.is_empty());
    }
}
