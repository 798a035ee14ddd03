//! Source 3: the Dumpoir backup mirror.
//!
//! Lower fidelity than Picuki: no follower count, no like counts, and the
//! only caption available is the image `alt` text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::sources::ProfileSource;
use crate::types::{ScrapedPost, ScrapedProfile, BIO_PLACEHOLDER, MAX_POSTS, NO_CAPTION};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct DumpoirSource {
    client: Client,
    base_url: String,
}

impl DumpoirSource {
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(&config.browser_user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.dumpoir_base_url.clone(),
        })
    }
}

#[async_trait]
impl ProfileSource for DumpoirSource {
    fn name(&self) -> &'static str {
        "dumpoir"
    }

    async fn fetch(&self, username: &str) -> Result<ScrapedProfile, ScrapeError> {
        let url = format!("{base}/v/{username}", base = self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let html = response.text().await?;
        Ok(parse_profile(&html, username))
    }
}

fn parse_profile(html: &str, username: &str) -> ScrapedProfile {
    let doc = Html::parse_document(html);

    let name_sel = Selector::parse(".user__title h1").expect("valid selector");
    let bio_sel = Selector::parse(".user__info-desc").expect("valid selector");
    let img_sel = Selector::parse(".content__img").expect("valid selector");

    let full_name = doc
        .select(&name_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| username.to_string());
    let biography = doc
        .select(&bio_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| BIO_PLACEHOLDER.to_string());

    let posts: Vec<ScrapedPost> = doc
        .select(&img_sel)
        .take(MAX_POSTS)
        .filter_map(|img| {
            let image_url = img.value().attr("src").filter(|src| !src.is_empty())?;
            let caption = img
                .value()
                .attr("alt")
                .filter(|alt| !alt.is_empty())
                .unwrap_or(NO_CAPTION);
            Some(ScrapedPost {
                caption: caption.to_string(),
                likes: "Unknown".to_string(),
                image_url: image_url.to_string(),
            })
        })
        .collect();

    // This mirror exposes no follower count at all.
    ScrapedProfile::new(username, full_name, biography, "Unknown", posts)
}
