//! Open Graph and Twitter Card meta tags data.
//!
//! Site-level defaults only. Page-specific tags (og:title, og:url) are the
//! template layer's job.

use crate::config::SiteConfig;

/// Default Open Graph tags from the site identity record.
pub struct OgDefaults<'a> {
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub locale: &'a str,
    pub description: &'a str,
    pub twitter_card: &'static str,
}

impl<'a> OgDefaults<'a> {
    /// Create default OG tags from site identity.
    pub fn from_site(site: &'a SiteConfig) -> Self {
        Self {
            og_type: "website",
            site_name: &site.title,
            locale: &site.lang,
            description: &site.description,
            twitter_card: "summary_large_image",
        }
    }
}
