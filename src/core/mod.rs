pub mod client;
pub mod engine;
pub mod export;
pub mod normalize;
pub mod params;
pub mod registry;
pub mod replay;
pub mod window;

pub use crate::domain::model::{
    OpportunityRecord, RawOpportunity, ScoutOutcome, SearchOutcome, SearchRequest, SearchWindow,
};
pub use crate::domain::ports::OpportunitySearch;
pub use crate::utils::error::Result;
