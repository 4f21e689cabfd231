//! Site identity configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── author     # AuthorConfig (byline/profile data)
//! ├── domain     # Domain resolution (env override with default)
//! ├── handle     # Global config handle
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! The record is a built-in literal: the generator does not read a config
//! file for site identity. The one externally supplied value is the domain,
//! resolved from [`DOMAIN_ENV`] on first access of the global handle.

mod author;
mod domain;
mod handle;

pub use author::AuthorConfig;
pub use domain::{DEFAULT_DOMAIN, DOMAIN_ENV};
pub use handle::site;

use crate::core::UrlPath;
use serde::{Deserialize, Serialize};

// ============================================================================
// root record
// ============================================================================

/// Root site identity record.
///
/// Constructed once per process (see [`site`]) and read directly by the
/// build pipeline and template layer: plain public fields, no mutation API.
/// Serialized field names use the camelCase wire shape the template layer
/// expects (`themeColor`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// URL scheme prefix, e.g. `"https://"`.
    pub protocol: String,

    /// Site domain. The env override wins over the built-in default.
    pub domain: String,

    /// Site title.
    pub title: String,

    /// Subtitle shown under the title.
    pub subtitle: String,

    /// BCP-47 language tag (e.g. `"en-US"`) for the `<html>` lang attribute.
    pub lang: String,

    /// Site description for `<head>` metadata and SEO tags.
    pub description: String,

    /// Author identity for bylines and profile UI.
    pub author: AuthorConfig,

    /// CSS color for the theme-color meta tag (mobile browser chrome tint).
    pub theme_color: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            protocol: "https://".into(),
            domain: DEFAULT_DOMAIN.into(),
            title: "Hedwig Blog".into(),
            subtitle: "An opinioneted blog with experiment description heavily powered by open source"
                .into(),
            lang: "en-US".into(),
            description: "Powered by SvelteKit/Urara".into(),
            author: AuthorConfig::default(),
            theme_color: "#3D4451".into(),
        }
    }
}

impl SiteConfig {
    /// Build the record with `domain` resolved from the environment.
    ///
    /// This is the single environment read of the crate; every other field
    /// is the built-in literal.
    pub fn resolve() -> Self {
        Self {
            domain: domain::resolve(),
            ..Self::default()
        }
    }

    /// Base URL for absolute link construction.
    ///
    /// The built-in domain literal already carries its scheme and is used
    /// as-is; an override like `example.com` gets the `protocol` prefix.
    /// The `domain` field itself is never rewritten.
    pub fn base_url(&self) -> String {
        if self.domain.contains("://") {
            self.domain.clone()
        } else {
            format!("{}{}", self.protocol, self.domain)
        }
    }

    /// Absolute URL for a site path (canonical links, sitemap entries,
    /// feed IDs). The path is percent-encoded at this output boundary.
    pub fn absolute(&self, path: &UrlPath) -> String {
        format!(
            "{}{}",
            self.base_url().trim_end_matches('/'),
            path.to_encoded()
        )
    }
}

// ============================================================================
// Test Helpers (available to config modules via `use crate::config::testenv`)
// ============================================================================

/// Environment mutation wrappers for tests.
///
/// `env::set_var` is unsafe in edition 2024; all test mutation goes through
/// these wrappers while holding [`testenv::lock`] so no other test reads the
/// environment mid-change.
#[cfg(test)]
pub(crate) mod testenv {
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serialize environment access across test threads.
    pub fn lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Set an environment variable for the current process.
    pub fn set_var(key: &str, value: &str) {
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the
        // environment concurrently.
        unsafe { std::env::set_var(key, value) }
    }

    /// Remove an environment variable from the current process.
    pub fn remove_var(key: &str) {
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the
        // environment concurrently.
        unsafe { std::env::remove_var(key) }
    }
}

// ============================================================================
// tests
// ============================================================================
