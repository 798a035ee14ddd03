//! Profile source adapters.
//!
//! Each adapter retrieves profile data from one external origin and
//! normalizes it to [`ScrapedProfile`]. Adapters are strategy objects behind
//! a common trait so the fallback chain can add, remove, or reorder sources
//! without touching orchestration logic.

mod dumpoir;
mod ig_api;
mod picuki;

pub use dumpoir::DumpoirSource;
pub use ig_api::IgApiSource;
pub use picuki::PicukiSource;

use async_trait::async_trait;

use crate::error::ScrapeError;
use crate::types::ScrapedProfile;

/// What an adapter does with a profile whose origin yielded zero posts.
///
/// The platform API adapter keeps postless profiles (a private account still
/// has a usable bio and follower count), while the HTML mirrors treat zero
/// extracted posts as a miss — mirror sites routinely serve empty shells for
/// missing or blocked profiles. The policy is per-adapter rather than
/// hardwired because the two behaviors are genuinely different judgment
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyProfilePolicy {
    /// Return the postless profile as a success.
    Keep,
    /// Treat zero posts as a failed attempt and fall through to the next
    /// source.
    Discard,
}

/// One external origin for profile data.
///
/// `attempt` is the orchestrator-facing boundary: it never lets a network or
/// parse error escape. Failures are logged with the source name and collapsed
/// to `None`, which the fallback chain reads as "try the next source".
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Policy applied when the origin yields a profile with zero posts.
    fn empty_policy(&self) -> EmptyProfilePolicy {
        EmptyProfilePolicy::Discard
    }

    /// Fetch and normalize the profile from this origin.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] on network failure, a non-success HTTP status,
    /// or a response missing the expected structure.
    async fn fetch(&self, username: &str) -> Result<ScrapedProfile, ScrapeError>;

    /// Try this source, collapsing every failure mode to `None`.
    async fn attempt(&self, username: &str) -> Option<ScrapedProfile> {
        let profile = match self.fetch(username).await {
            Ok(profile) => profile,
            Err(error) => {
                tracing::warn!(source = self.name(), username, error = %error, "source attempt failed");
                return None;
            }
        };

        if profile.posts.is_empty() {
            return match self.empty_policy() {
                EmptyProfilePolicy::Keep => {
                    tracing::warn!(
                        source = self.name(),
                        username,
                        "found 0 posts; account may be private"
                    );
                    Some(profile)
                }
                EmptyProfilePolicy::Discard => {
                    tracing::warn!(
                        source = self.name(),
                        username,
                        "found 0 posts; treating as a miss"
                    );
                    None
                }
            };
        }

        tracing::info!(
            source = self.name(),
            username,
            posts = profile.posts.len(),
            "source attempt succeeded"
        );
        Some(profile)
    }
}
