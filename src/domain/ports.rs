use crate::domain::model::{SearchOutcome, SearchRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OpportunitySearch: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome>;
}
