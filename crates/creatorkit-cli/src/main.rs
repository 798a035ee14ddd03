use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use creatorkit_scraper::{mock_profile, ProfileScraper, ScraperConfig};

#[derive(Debug, Parser)]
#[command(name = "creatorkit-cli")]
#[command(about = "CreatorKit command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape a public Instagram profile through the fallback chain.
    Scrape {
        /// Profile handle, without the leading @.
        username: String,

        /// Also print the flattened transcript fed to the analysis prompt.
        #[arg(long)]
        transcript: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = creatorkit_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape {
            username,
            transcript,
        } => {
            let scraper = ProfileScraper::new(&ScraperConfig::from_app_config(&config))?;
            let profile = scraper.scrape(&username).await;

            if profile == mock_profile(&username) {
                println!("note: all live sources failed; showing the demo fixture\n");
            }

            println!("Profile:   {} (@{})", profile.full_name, profile.username);
            println!("Bio:       {}", profile.biography);
            println!("Followers: {}", profile.followers_count);
            println!("Posts:     {}", profile.posts.len());
            for (i, post) in profile.posts.iter().enumerate() {
                println!("  [{n}] {caption} ({likes} likes)", n = i + 1, caption = post.caption, likes = post.likes);
                println!("      {}", post.image_url);
            }

            if transcript {
                println!("\n--- transcript ---\n{}", profile.transcript);
            }
        }
    }

    Ok(())
}
