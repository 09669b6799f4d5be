use crate::core::normalize::normalize;
use crate::domain::model::{ScoutOutcome, SearchOutcome, SearchRequest};
use crate::domain::ports::OpportunitySearch;
use crate::utils::error::Result;

/// Runs one assembled request through the search client and normalizes
/// whatever comes back.
pub struct ScoutEngine<C: OpportunitySearch> {
    client: C,
}

impl<C: OpportunitySearch> ScoutEngine<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn run(&self, request: &SearchRequest) -> Result<ScoutOutcome> {
        tracing::debug!(
            "Searching {} - {} (limit {})",
            request.window.posted_from(),
            request.window.posted_to(),
            request.limit
        );

        match self.client.search(request).await? {
            SearchOutcome::Success(raw) => {
                tracing::debug!("API returned {} opportunities", raw.len());
                Ok(ScoutOutcome::Found(normalize(&raw)))
            }
            SearchOutcome::Empty => Ok(ScoutOutcome::Empty),
            SearchOutcome::ApiError { status, body } => {
                Ok(ScoutOutcome::ApiError { status, body })
            }
        }
    }
}
