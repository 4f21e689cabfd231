//! Urara - site identity configuration for a personal blog.
//!
//! One immutable record ([`SiteConfig`]) read everywhere: the build pipeline
//! pulls shared `<head>` metadata from it, templates render the author byline
//! from it, and absolute URLs (canonical links, sitemap entries, feed IDs)
//! are rooted at its `protocol` + `domain`.
//!
//! The record is a built-in literal with exactly one externally supplied
//! value: the domain, taken from `URARA_SITE_DOMAIN` when set and non-empty.

mod config;
mod core;
mod head;
mod inputs;
pub mod logger;
mod utils;

pub use crate::config::{AuthorConfig, DEFAULT_DOMAIN, DOMAIN_ENV, SiteConfig, site};
pub use crate::core::UrlPath;
pub use crate::head::{HeadMeta, OgDefaults};
pub use crate::inputs::build_inputs;
