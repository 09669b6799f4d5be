use crate::core::client::SAM_SEARCH_URL;
use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sam-scout")]
#[command(about = "Discover SAM.gov contracting opportunities by category, agency and date range")]
pub struct Cli {
    #[arg(long, help = "SAM.gov API key (falls back to the SAM_API_KEY env var)")]
    pub api_key: Option<String>,

    #[arg(long, default_value = SAM_SEARCH_URL)]
    pub endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search current opportunities by material category.
    Search(SearchArgs),
    /// Replay a historical contract through the search path.
    Replay(ReplayArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, value_delimiter = ',', required = true)]
    pub categories: Vec<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Agency display names; defaults to the built-in target agency list"
    )]
    pub agencies: Vec<String>,

    #[arg(long, help = "Window start date (YYYY-MM-DD)")]
    pub from: Option<String>,

    #[arg(long, help = "Window end date (YYYY-MM-DD)")]
    pub to: Option<String>,

    #[arg(long, default_value = "50")]
    pub limit: u32,

    #[arg(
        long,
        help = "Use the fixed keyword list with OR semantics instead of per-category code filters"
    )]
    pub keyword_union: bool,

    #[arg(long, help = "Include PSC filters in keyword-union mode (may reduce matches)")]
    pub include_psc: bool,

    #[arg(long, help = "Write results to a CSV file at this path")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    #[arg(long, help = "CSV file of historical contracts")]
    pub contracts: PathBuf,

    #[arg(long, help = "Exact title of the contract to replay")]
    pub title: String,

    #[arg(long, default_value = "50")]
    pub limit: u32,

    #[arg(long, help = "Write results to a CSV file at this path")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// The API key flag wins; otherwise the SAM_API_KEY environment
    /// variable acts as the secret store.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var("SAM_API_KEY").map_err(|_| ScoutError::MissingConfigError {
            field: "api_key".to_string(),
        })
    }

    fn limit(&self) -> u32 {
        match &self.command {
            Command::Search(args) => args.limit,
            Command::Replay(args) => args.limit,
        }
    }
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_range("limit", self.limit(), 10, 100)?;
        validate_non_empty_string("api_key", &self.resolve_api_key()?)?;
        Ok(())
    }
}
