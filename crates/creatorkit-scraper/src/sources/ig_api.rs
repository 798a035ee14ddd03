//! Source 1: the platform's internal web-profile JSON endpoint.
//!
//! Publicly reachable without credentials, but only when the request looks
//! like it came from the official mobile app. Cheapest and most accurate
//! source when it works; adversarially rate-limited in practice, hence the
//! mirror fallbacks.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::format::format_count;
use crate::sources::{EmptyProfilePolicy, ProfileSource};
use crate::types::{ScrapedPost, ScrapedProfile, BIO_PLACEHOLDER, MAX_POSTS, NO_CAPTION};

/// App ID the web client sends; required for the endpoint to answer.
const IG_APP_ID: &str = "936619743392459";
/// Official Android app user agent.
const MOBILE_USER_AGENT: &str = "Instagram 219.0.0.12.117 Android";

pub struct IgApiSource {
    client: Client,
    base_url: String,
    empty_policy: EmptyProfilePolicy,
}

impl IgApiSource {
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: config.ig_api_base_url.clone(),
            // Private accounts still expose bio and follower count here, so a
            // postless profile is kept instead of falling through to mirrors.
            empty_policy: EmptyProfilePolicy::Keep,
        })
    }
}

#[async_trait]
impl ProfileSource for IgApiSource {
    fn name(&self) -> &'static str {
        "ig_api"
    }

    fn empty_policy(&self) -> EmptyProfilePolicy {
        self.empty_policy
    }

    async fn fetch(&self, username: &str) -> Result<ScrapedProfile, ScrapeError> {
        let url = format!(
            "{base}/api/v1/users/web_profile_info/?username={username}",
            base = self.base_url
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, MOBILE_USER_AGENT)
            .header("X-IG-App-ID", IG_APP_ID)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Sec-Fetch-Site", "same-origin")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Dest", "empty")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body: serde_json::Value = response.json().await?;
        let Some(user) = body.get("data").and_then(|data| data.get("user")) else {
            return Err(ScrapeError::MissingField {
                context: format!("data.user in web_profile_info for {username}"),
            });
        };

        Ok(profile_from_user(user, username))
    }
}

/// Normalize the nested `data.user` document into the common profile shape.
fn profile_from_user(user: &serde_json::Value, username: &str) -> ScrapedProfile {
    let full_name = non_empty_str(user.get("full_name")).unwrap_or(username);
    let biography = non_empty_str(user.get("biography")).unwrap_or(BIO_PLACEHOLDER);

    let followers = user
        .get("edge_followed_by")
        .and_then(|edge| edge.get("count"))
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);

    let posts = user
        .get("edge_owner_to_timeline_media")
        .and_then(|media| media.get("edges"))
        .and_then(serde_json::Value::as_array)
        .map(|edges| {
            edges
                .iter()
                .take(MAX_POSTS)
                .filter_map(post_from_edge)
                .collect()
        })
        .unwrap_or_default();

    ScrapedProfile::new(
        username,
        full_name,
        biography,
        format_count(followers),
        posts,
    )
}

/// Map one timeline media edge to a post. Edges without a display image are
/// dropped entirely.
fn post_from_edge(edge: &serde_json::Value) -> Option<ScrapedPost> {
    let node = edge.get("node")?;

    let image_url = non_empty_str(node.get("display_url"))?;

    let caption = node
        .get("edge_media_to_caption")
        .and_then(|c| c.get("edges"))
        .and_then(|edges| edges.as_array().and_then(|e| e.first()))
        .and_then(|first| first.get("node"))
        .and_then(|n| n.get("text"))
        .and_then(serde_json::Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_CAPTION);

    let likes = node
        .get("edge_liked_by")
        .and_then(|edge| edge.get("count"))
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);

    Some(ScrapedPost {
        caption: caption.to_string(),
        likes: format_count(likes),
        image_url: image_url.to_string(),
    })
}

fn non_empty_str(value: Option<&serde_json::Value>) -> Option<&str> {
    value
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
}
