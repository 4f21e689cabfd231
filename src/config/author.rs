//! Author identity for bylines and profile rendering.
//!
//! Templates read these fields directly to build the byline and the profile
//! card (name, avatar, status glyph, bio).

use serde::{Deserialize, Serialize};

/// Author record, owned exclusively by [`SiteConfig`](super::SiteConfig).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorConfig {
    /// Display name.
    pub name: String,

    /// URL of the avatar image.
    pub avatar: String,

    /// Short emoji/status glyph shown next to the avatar.
    pub status: String,

    /// Free-text biography.
    pub bio: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Vincenzo Palazzo".into(),
            avatar: "https://avatars.githubusercontent.com/u/17150045?v=4".into(),
            status: "🦍".into(),
            bio: "It is not important who you are, but what you do that define yourself!".into(),
        }
    }
}
