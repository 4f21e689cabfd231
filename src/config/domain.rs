//! Domain resolution: environment override with a built-in default.
//!
//! The only derived value in the record. [`DOMAIN_ENV`] wins when set and
//! non-empty; the value is taken verbatim. No trimming, no scheme injection,
//! no trailing-slash stripping — a malformed override is the deployment's
//! problem, not ours.

use crate::debug;
use std::env;

/// Environment variable consulted for the domain override.
pub const DOMAIN_ENV: &str = "URARA_SITE_DOMAIN";

/// Fallback domain when no override is provided.
///
/// Deployment data, swapped per site.
pub const DEFAULT_DOMAIN: &str = "https://blog-vincenzopalazzo.netlify.app";

/// Resolve the domain from the process environment.
pub(crate) fn resolve() -> String {
    resolve_from(env::var(DOMAIN_ENV).ok())
}

/// Pick the override when present and non-empty, else the default.
fn resolve_from(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => {
            debug!("config"; "domain override from {}", DOMAIN_ENV);
            v
        }
        _ => {
            debug!("config"; "{} not set, using default domain", DOMAIN_ENV);
            DEFAULT_DOMAIN.to_string()
        }
    }
}
