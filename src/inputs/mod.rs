//! Template input payload.
//!
//! The template layer receives site identity as JSON at build time. Author
//! byline/profile data travels inside the `site.author` object; templates
//! read `site.title`, `site.author.name`, etc.

use crate::config::SiteConfig;
use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

/// Key the site record is published under.
const SITE_KEY: &str = "site";

/// Build the JSON inputs handed to the template layer.
///
/// The payload carries the full record under `"site"` plus a `"format"`
/// marker so templates can detect HTML output. Key order is preserved.
pub fn build_inputs(site: &SiteConfig) -> Result<Value> {
    let site_json = serde_json::to_value(site).context("failed to serialize site identity")?;

    let mut combined = Map::new();
    combined.insert(SITE_KEY.to_string(), site_json);
    combined.insert("format".to_string(), json!("html"));

    Ok(Value::Object(combined))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let inputs = build_inputs(&SiteConfig::default()).unwrap();
        let payload = inputs.as_object().unwrap();

        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, ["site", "format"]);
        assert_eq!(payload["format"], json!("html"));
    }

    #[test]
    fn test_payload_carries_identity_and_byline() {
        let inputs = build_inputs(&SiteConfig::default()).unwrap();
        let site = &inputs["site"];

        assert_eq!(site["title"], json!("Hedwig Blog"));
        assert_eq!(site["themeColor"], json!("#3D4451"));
        assert_eq!(site["author"]["name"], json!("Vincenzo Palazzo"));
        assert_eq!(site["author"]["status"], json!("🦍"));
    }
}
