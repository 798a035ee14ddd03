//! Instagram profile scraper with a cascading source-fallback chain.
//!
//! Tries profile sources in priority order (the platform's own web-profile
//! JSON endpoint, then the Picuki and Dumpoir read-only mirrors) and returns
//! the first usable result. When every source fails, a deterministic mock
//! profile is returned so callers always receive displayable data.

pub mod config;
pub mod error;
pub mod format;
pub mod mock;
pub mod scrape;
pub mod sources;
pub mod transcript;
pub mod types;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use mock::mock_profile;
pub use scrape::ProfileScraper;
pub use sources::{EmptyProfilePolicy, ProfileSource};
pub use types::{ScrapedPost, ScrapedProfile, MAX_POSTS};
