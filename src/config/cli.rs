use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "itinerary-planner")]
#[command(about = "Browse, create and get recommendations for travel itineraries")]
pub struct CliConfig {
    /// Base URL of the itinerary service
    #[arg(long, env = "API_URL")]
    pub itinerary_api: Option<String>,

    /// Base URL of the recommendation service
    #[arg(long, env = "RECOMMEND_API_URL")]
    pub recommend_api: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List itineraries with optional filters
    List {
        #[arg(long)]
        page: Option<usize>,
        /// Number of nights, e.g. "4" or "2 nights"
        #[arg(long)]
        nights: Option<String>,
        /// Region filter; "all" disables it
        #[arg(long)]
        regions: Option<String>,
    },
    /// Show the featured itineraries of the home page
    Featured,
    /// Show one itinerary with its day plan
    Show { id: i64 },
    /// Create an itinerary from a TOML or JSON draft file
    Create {
        /// Draft file (.toml or .json)
        #[arg(long)]
        draft: String,
        /// Validate and preview without submitting
        #[arg(long)]
        dry_run: bool,
    },
    /// Ask the recommendation service for itineraries
    Recommend {
        #[arg(long, default_value = "4")]
        nights: String,
        #[arg(long)]
        regions: Option<String>,
        #[arg(long, default_value_t = 1000)]
        budget: u32,
        /// beach, adventure, luxury, cultural, nightlife, family
        #[arg(long = "preference")]
        preferences: Vec<String>,
    },
    /// Print the reference catalogs used by drafts
    Catalog,
}

impl CliConfig {
    /// 設定檔為基礎，命令列參數覆蓋
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.settings()
            }
            None => Settings::default(),
        };

        if let Some(url) = &self.itinerary_api {
            settings.itinerary_api_url = url.clone();
        }
        if let Some(url) = &self.recommend_api {
            settings.recommend_api_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }
}
