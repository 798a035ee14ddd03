//! Source 2: the Picuki read-only mirror, scraped as HTML.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::sources::ProfileSource;
use crate::types::{ScrapedPost, ScrapedProfile, BIO_PLACEHOLDER, MAX_POSTS, NO_CAPTION};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct PicukiSource {
    client: Client,
    base_url: String,
}

impl PicukiSource {
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
            base_url: config.picuki_base_url.clone(),
        })
    }
}

#[async_trait]
impl ProfileSource for PicukiSource {
    fn name(&self) -> &'static str {
        "picuki"
    }

    async fn fetch(&self, username: &str) -> Result<ScrapedProfile, ScrapeError> {
        let url = format!("{base}/profile/{username}", base = self.base_url);

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .send()
            .await?;

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

/// Extract profile fields and photo blocks with CSS-selector queries.
///
/// Kept synchronous and separate from the fetch so the parsed DOM (which is
/// not `Send`) never lives across an await point, and so the extraction can
/// be tested against fixture HTML.
fn parse_profile(html: &str, username: &str) -> ScrapedProfile {
    let doc = Html::parse_document(html);

    let name_sel = Selector::parse(".profile-name h1").expect("valid selector");
    let bio_sel = Selector::parse(".profile-description").expect("valid selector");
    let followers_sel = Selector::parse(".followed_by").expect("valid selector");
    let photo_sel = Selector::parse(".box-photo").expect("valid selector");
    let caption_sel = Selector::parse(".photo-description").expect("valid selector");
    let likes_sel = Selector::parse(".likes_photo").expect("valid selector");
    let img_sel = Selector::parse("img").expect("valid selector");

    let full_name = select_text(&doc, &name_sel).unwrap_or_else(|| username.to_string());
    let biography = select_text(&doc, &bio_sel).unwrap_or_else(|| BIO_PLACEHOLDER.to_string());
    let followers_count = select_text(&doc, &followers_sel)
        .map(|text| text.replace("Followers", "").trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    let posts: Vec<ScrapedPost> = doc
        .select(&photo_sel)
        .take(MAX_POSTS)
        .filter_map(|block| {
            let image_url = block
                .select(&img_sel)
                .next()
                .and_then(|img| img.value().attr("src"))
                .filter(|src| !src.is_empty())?;

            let caption = element_text(block.select(&caption_sel).next())
                .unwrap_or_else(|| NO_CAPTION.to_string());
            let likes =
                element_text(block.select(&likes_sel).next()).unwrap_or_else(|| "0".to_string());

            Some(ScrapedPost {
                caption,
                likes,
                image_url: image_url.to_string(),
            })
        })
        .collect();

    ScrapedProfile::new(username, full_name, biography, followers_count, posts)
}

fn select_text(doc: &Html, selector: &Selector) -> Option<String> {
    element_text(doc.select(selector).next())
}

fn element_text(element: Option<scraper::ElementRef<'_>>) -> Option<String> {
    let text = element?.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_profile;

    fn page(posts: &str) -> String {
        format!(
            r#"<html><body>
            <div class="profile-name"><h1> Nike </h1></div>
            <div class="profile-description">Just Do It</div>
            <div class="followed_by"> 2.5M Followers </div>
            <div class="photos">{posts}</div>
            </body></html>"#
        )
    }

    fn photo_block(caption: &str, likes: &str, src: &str) -> String {
        format!(
            r#"<div class="box-photo">
                <div class="photo-description">{caption}</div>
                <div class="likes_photo">{likes}</div>
                <img src="{src}">
            </div>"#
        )
    }

    #[test]
    fn extracts_profile_header_and_posts() {
        let html = page(&format!(
            "{}{}",
            photo_block("Air Max drop", "12.4k", "https://mirror.example/1.jpg"),
            photo_block("Run club", "830", "https://mirror.example/2.jpg"),
        ));

        let profile = parse_profile(&html, "nike");
        assert_eq!(profile.full_name, "Nike");
        assert_eq!(profile.biography, "Just Do It");
        assert_eq!(profile.followers_count, "2.5M");
        assert_eq!(profile.posts.len(), 2);
        assert_eq!(profile.posts[0].caption, "Air Max drop");
        assert_eq!(profile.posts[1].likes, "830");
    }

    #[test]
    fn caps_posts_at_six() {
        let blocks: String = (0..9)
            .map(|i| photo_block("p", "1", &format!("https://mirror.example/{i}.jpg")))
            .collect();
        let profile = parse_profile(&page(&blocks), "busy");
        assert_eq!(profile.posts.len(), 6);
    }

    #[test]
    fn drops_blocks_without_image_src() {
        let html = page(&format!(
            "{}<div class=\"box-photo\"><div class=\"photo-description\">no img</div></div>",
            photo_block("kept", "3", "https://mirror.example/kept.jpg"),
        ));
        let profile = parse_profile(&html, "gappy");
        assert_eq!(profile.posts.len(), 1);
        assert_eq!(profile.posts[0].caption, "kept");
    }

    #[test]
    fn empty_shell_page_falls_back_to_defaults() {
        let profile = parse_profile("<html><body></body></html>", "ghost");
        assert_eq!(profile.full_name, "ghost");
        assert_eq!(profile.biography, "Bio not available");
        assert_eq!(profile.followers_count, "Unknown");
        assert!(profile.posts.is_empty());
    }

    #[test]
    fn captionless_block_gets_placeholder() {
        let html = page(
            r#"<div class="box-photo"><img src="https://mirror.example/q.jpg"></div>"#,
        );
        let profile = parse_profile(&html, "quiet");
        assert_eq!(profile.posts[0].caption, "No caption");
        assert_eq!(profile.posts[0].likes, "0");
    }
}
