//! Fallback orchestrator: an ordered, short-circuiting chain over the
//! profile sources, degrading to the mock profile when everything misses.

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::mock::mock_profile;
use crate::sources::{DumpoirSource, IgApiSource, PicukiSource, ProfileSource};
use crate::types::ScrapedProfile;

/// Runs the source chain in priority order.
///
/// Sources are tried strictly one at a time — no retries within a source and
/// no parallel racing, out of respect for each mirror's rate tolerance.
/// Worst-case latency is therefore the sum of the per-source timeouts.
pub struct ProfileScraper {
    sources: Vec<Box<dyn ProfileSource>>,
}

impl ProfileScraper {
    /// Build the default chain: platform API, then Picuki, then Dumpoir.
    ///
    /// The structured API is cheapest and most accurate when available; the
    /// two HTML mirrors are decreasing-reliability fallbacks kept because the
    /// primary origin is adversarially rate-limited in practice.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if an HTTP client cannot be constructed.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self::with_sources(vec![
            Box::new(IgApiSource::new(config)?),
            Box::new(PicukiSource::new(config)?),
            Box::new(DumpoirSource::new(config)?),
        ]))
    }

    /// Build a scraper over an explicit source list. Tests inject fakes here.
    #[must_use]
    pub fn with_sources(sources: Vec<Box<dyn ProfileSource>>) -> Self {
        Self { sources }
    }

    /// Scrape a profile. Total: always returns a well-formed profile and
    /// never fails, falling back to [`mock_profile`] when every source
    /// misses.
    pub async fn scrape(&self, username: &str) -> ScrapedProfile {
        for source in &self.sources {
            if let Some(profile) = source.attempt(username).await {
                tracing::info!(source = source.name(), username, "scrape resolved");
                return profile;
            }
        }

        tracing::warn!(username, "all sources failed; returning mock profile");
        mock_profile(username)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::ProfileScraper;
    use crate::error::ScrapeError;
    use crate::mock::mock_profile;
    use crate::sources::{EmptyProfilePolicy, ProfileSource};
    use crate::types::{ScrapedPost, ScrapedProfile};

    /// Fake source that counts how often it is tried.
    struct FakeSource {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        result: Option<ScrapedProfile>,
        policy: EmptyProfilePolicy,
    }

    impl FakeSource {
        fn succeeding(name: &'static str, profile: ScrapedProfile) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    name,
                    calls: Arc::clone(&calls),
                    result: Some(profile),
                    policy: EmptyProfilePolicy::Discard,
                },
                calls,
            )
        }

        fn failing(name: &'static str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    name,
                    calls: Arc::clone(&calls),
                    result: None,
                    policy: EmptyProfilePolicy::Discard,
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl ProfileSource for FakeSource {
        fn name(&self) -> &'static str {
            self.name
        }

        fn empty_policy(&self) -> EmptyProfilePolicy {
            self.policy
        }

        async fn fetch(&self, _username: &str) -> Result<ScrapedProfile, ScrapeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().ok_or(ScrapeError::HttpStatus {
                status: 503,
                url: "http://fake.test".to_string(),
            })
        }
    }

    fn profile(full_name: &str) -> ScrapedProfile {
        ScrapedProfile::new(
            "nike",
            full_name,
            "Just Do It",
            "2.5M",
            vec![ScrapedPost {
                caption: "Air Max drop".to_string(),
                likes: "12.4k".to_string(),
                image_url: "https://cdn.example.com/1.jpg".to_string(),
            }],
        )
    }

    #[tokio::test]
    async fn first_success_short_circuits_remaining_sources() {
        let (first, first_calls) = FakeSource::succeeding("first", profile("First"));
        let (second, second_calls) = FakeSource::succeeding("second", profile("Second"));
        let (third, third_calls) = FakeSource::succeeding("third", profile("Third"));

        let scraper =
            ProfileScraper::with_sources(vec![Box::new(first), Box::new(second), Box::new(third)]);
        let result = scraper.scrape("nike").await;

        assert_eq!(result.full_name, "First", "first source's result is returned verbatim");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
        assert_eq!(third_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_source_falls_through_to_next_and_stops_there() {
        let (first, first_calls) = FakeSource::failing("first");
        let (second, second_calls) = FakeSource::succeeding("second", profile("Second"));
        let (third, third_calls) = FakeSource::succeeding("third", profile("Third"));

        let scraper =
            ProfileScraper::with_sources(vec![Box::new(first), Box::new(second), Box::new(third)]);
        let result = scraper.scrape("nike").await;

        assert_eq!(result.full_name, "Second");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(third_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn total_failure_returns_mock_profile_exactly() {
        let (first, _) = FakeSource::failing("first");
        let (second, _) = FakeSource::failing("second");
        let (third, _) = FakeSource::failing("third");

        let scraper =
            ProfileScraper::with_sources(vec![Box::new(first), Box::new(second), Box::new(third)]);
        let result = scraper.scrape("someuser").await;

        assert_eq!(result, mock_profile("someuser"));
        assert_eq!(result.posts.len(), 6);
    }

    #[tokio::test]
    async fn empty_source_list_degrades_to_mock() {
        let scraper = ProfileScraper::with_sources(vec![]);
        let result = scraper.scrape("someuser").await;
        assert_eq!(result, mock_profile("someuser"));
    }

    #[tokio::test]
    async fn postless_profile_with_keep_policy_wins_without_fallthrough() {
        let calls = Arc::new(AtomicUsize::new(0));
        let postless = ScrapedProfile::new("priv", "Private Person", "Bio", "120", vec![]);
        let keeper = FakeSource {
            name: "keeper",
            calls: Arc::clone(&calls),
            result: Some(postless.clone()),
            policy: EmptyProfilePolicy::Keep,
        };
        let (second, second_calls) = FakeSource::succeeding("second", profile("Second"));

        let scraper = ProfileScraper::with_sources(vec![Box::new(keeper), Box::new(second)]);
        let result = scraper.scrape("priv").await;

        assert_eq!(result, postless);
        assert!(result.posts.is_empty());
        assert_eq!(second_calls.load(Ordering::SeqCst), 0, "no fallthrough for Keep policy");
    }

    #[tokio::test]
    async fn postless_profile_with_discard_policy_falls_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let postless = ScrapedProfile::new("priv", "Private Person", "Bio", "120", vec![]);
        let discarder = FakeSource {
            name: "discarder",
            calls,
            result: Some(postless),
            policy: EmptyProfilePolicy::Discard,
        };
        let (second, second_calls) = FakeSource::succeeding("second", profile("Second"));

        let scraper = ProfileScraper::with_sources(vec![Box::new(discarder), Box::new(second)]);
        let result = scraper.scrape("priv").await;

        assert_eq!(result.full_name, "Second");
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }
}
