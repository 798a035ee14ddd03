use serde::{Deserialize, Serialize};

use crate::transcript::build_transcript;

/// Maximum number of posts retained per profile, regardless of how many the
/// origin exposes.
pub const MAX_POSTS: usize = 6;

/// Placeholder used when an origin has no biography for the profile.
pub const BIO_PLACEHOLDER: &str = "Bio not available";

/// Placeholder used when a post carries no caption.
pub const NO_CAPTION: &str = "No caption";

/// One social-profile snapshot at fetch time.
///
/// Created fresh on every scrape request; never cached, persisted, or merged
/// with prior fetches. The follower count is a display string (`"2.5M"`,
/// `"15.2k"`, `"Unknown"`) because the sources disagree on raw vs. formatted
/// representations and consumers only ever display it.
///
/// Serialized field names are camelCase to match the dashboard's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedProfile {
    pub username: String,
    pub full_name: String,
    pub biography: String,
    pub followers_count: String,
    /// Most-recent-first, capped at [`MAX_POSTS`].
    pub posts: Vec<ScrapedPost>,
    /// Flat text rendering of the profile, computed once at construction and
    /// never mutated afterward. Feeds the downstream niche-analysis prompt.
    pub transcript: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedPost {
    pub caption: String,
    pub likes: String,
    /// Absolute URL. Sources drop posts without a resolvable image rather
    /// than keeping them with an empty field.
    pub image_url: String,
}

impl ScrapedProfile {
    /// Assemble a profile, deriving the transcript from the other fields.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        biography: impl Into<String>,
        followers_count: impl Into<String>,
        posts: Vec<ScrapedPost>,
    ) -> Self {
        let username = username.into();
        let full_name = full_name.into();
        let biography = biography.into();
        let followers_count = followers_count.into();
        let transcript =
            build_transcript(&username, &full_name, &biography, &followers_count, &posts);
        Self {
            username,
            full_name,
            biography,
            followers_count,
            posts,
            transcript,
        }
    }
}
