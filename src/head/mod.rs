//! Site-wide `<head>` metadata.
//!
//! Renders the head block every page shares: title, description, author,
//! theme-color, and Open Graph defaults. The generator embeds the rendered
//! block before page-specific tags. Empty fields emit no tag.

mod og;

pub use og::OgDefaults;

use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

/// Site-wide `<head>` content derived from the identity record.
pub struct HeadMeta<'a> {
    site: &'a SiteConfig,
}

impl<'a> HeadMeta<'a> {
    pub fn from_site(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// `lang` attribute value for the `<html>` root.
    pub fn html_lang(&self) -> &str {
        &self.site.lang
    }

    /// Render the shared head block.
    pub fn render(&self) -> String {
        let site = self.site;
        let mut out = String::with_capacity(512);

        if !site.title.is_empty() {
            let _ = writeln!(out, "<title>{}</title>", escape(&site.title));
        }
        if !site.description.is_empty() {
            push_meta(&mut out, "description", &site.description);
        }
        if !site.author.name.is_empty() {
            push_meta(&mut out, "author", &site.author.name);
        }
        if !site.theme_color.is_empty() {
            push_meta(&mut out, "theme-color", &site.theme_color);
        }

        let og = OgDefaults::from_site(site);
        push_property_meta(&mut out, "og:type", og.og_type);
        if !og.site_name.is_empty() {
            push_property_meta(&mut out, "og:site_name", og.site_name);
        }
        if !og.locale.is_empty() {
            push_property_meta(&mut out, "og:locale", og.locale);
        }
        if !og.description.is_empty() {
            push_property_meta(&mut out, "og:description", og.description);
        }
        push_meta(&mut out, "twitter:card", og.twitter_card);

        out
    }

    /// Canonical `<link>` for a page.
    pub fn canonical(&self, path: &UrlPath) -> String {
        format!(
            "<link rel=\"canonical\" href=\"{}\">",
            escape_attr(&self.site.absolute(path))
        )
    }
}

fn push_meta(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        "<meta name=\"{}\" content=\"{}\">",
        name,
        escape_attr(content)
    );
}

fn push_property_meta(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        "<meta property=\"{}\" content=\"{}\">",
        property,
        escape_attr(content)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_site() {
        let site = SiteConfig::default();
        let head = HeadMeta::from_site(&site).render();

        assert!(head.contains("<title>Hedwig Blog</title>"));
        assert!(head.contains("<meta name=\"description\" content=\"Powered by SvelteKit/Urara\">"));
        assert!(head.contains("<meta name=\"author\" content=\"Vincenzo Palazzo\">"));
        assert!(head.contains("<meta name=\"theme-color\" content=\"#3D4451\">"));
        assert!(head.contains("<meta property=\"og:site_name\" content=\"Hedwig Blog\">"));
        assert!(head.contains("<meta property=\"og:locale\" content=\"en-US\">"));
        assert!(head.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
    }

    #[test]
    fn test_render_skips_empty_fields() {
        let site = SiteConfig {
            description: String::new(),
            ..SiteConfig::default()
        };
        let head = HeadMeta::from_site(&site).render();

        assert!(!head.contains("name=\"description\""));
        // og:description mirrors the description field
        assert!(!head.contains("og:description"));
        assert!(head.contains("<title>"));
    }

    #[test]
    fn test_render_escapes_values() {
        let site = SiteConfig {
            title: "Tom & \"Jerry\"".into(),
            ..SiteConfig::default()
        };
        let head = HeadMeta::from_site(&site).render();

        assert!(head.contains("<title>Tom &amp; &quot;Jerry&quot;</title>"));
        assert!(head.contains("content=\"Tom &amp; &quot;Jerry&quot;\""));
    }

    #[test]
    fn test_canonical_link() {
        let site = SiteConfig {
            domain: "example.com".into(),
            ..SiteConfig::default()
        };
        let head = HeadMeta::from_site(&site);
        assert_eq!(
            head.canonical(&UrlPath::from_page("/posts/hello/")),
            "<link rel=\"canonical\" href=\"https://example.com/posts/hello/\">"
        );
    }

    #[test]
    fn test_html_lang() {
        let site = SiteConfig::default();
        assert_eq!(HeadMeta::from_site(&site).html_lang(), "en-US");
    }
}
