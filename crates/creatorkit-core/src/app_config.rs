use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration shared by the server and CLI binaries.
///
/// The scraper base-URL fields are `None` unless overridden, in which case
/// `creatorkit_scraper::ScraperConfig::from_app_config` applies them on top
/// of the production defaults. Overriding them is only useful for staging
/// mirrors and local test servers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub ig_api_base_url: Option<String>,
    pub picuki_base_url: Option<String>,
    pub dumpoir_base_url: Option<String>,
    pub scraper_user_agent: Option<String>,
}
