pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{Cli, Command};
pub use core::client::SamClient;
pub use core::engine::ScoutEngine;
pub use domain::model::{OpportunityRecord, ScoutOutcome, SearchRequest, SearchWindow};
pub use utils::error::{Result, ScoutError};
