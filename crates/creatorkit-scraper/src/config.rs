use creatorkit_core::AppConfig;

/// Default desktop-browser user agent sent to the HTML mirrors. The mirrors
/// serve empty shells to obvious bot agents.
pub const DEFAULT_BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Origins and user agent for the source adapters.
///
/// Defaults are the production origins; tests point these at a local
/// `wiremock` server instead. Constructed explicitly and passed down so no
/// adapter depends on module-load-time state.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub ig_api_base_url: String,
    pub picuki_base_url: String,
    pub dumpoir_base_url: String,
    pub browser_user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            ig_api_base_url: "https://www.instagram.com".to_string(),
            picuki_base_url: "https://www.picuki.com".to_string(),
            dumpoir_base_url: "https://www.dumpoir.com".to_string(),
            browser_user_agent: DEFAULT_BROWSER_USER_AGENT.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Apply any base-URL / user-agent overrides from the app configuration
    /// on top of the production defaults.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = &config.ig_api_base_url {
            cfg.ig_api_base_url = trim_trailing_slash(url);
        }
        if let Some(url) = &config.picuki_base_url {
            cfg.picuki_base_url = trim_trailing_slash(url);
        }
        if let Some(url) = &config.dumpoir_base_url {
            cfg.dumpoir_base_url = trim_trailing_slash(url);
        }
        if let Some(ua) = &config.scraper_user_agent {
            cfg.browser_user_agent.clone_from(ua);
        }
        cfg
    }
}

fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
