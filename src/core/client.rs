use crate::domain::model::{RawOpportunity, SearchOutcome, SearchRequest};
use crate::domain::ports::OpportunitySearch;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Production search endpoint.
pub const SAM_SEARCH_URL: &str = "https://api.sam.gov/opportunities/v2/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    opportunities: Vec<RawOpportunity>,
}

/// Thin client over the SAM.gov opportunities search API. One blocking-style
/// call per search: no retries, no pagination follow-up, default timeouts.
#[derive(Debug, Clone)]
pub struct SamClient {
    client: Client,
    base_url: String,
}

impl SamClient {
    pub fn new() -> Self {
        Self::with_base_url(SAM_SEARCH_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for SamClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OpportunitySearch for SamClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        tracing::debug!("Making API request to: {}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .header("accept", "application/json")
            .query(&request.query_params())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        // 200 is the only success status; everything else is surfaced
        // verbatim, transient or not.
        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            return Ok(SearchOutcome::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SearchResponse = response.json().await?;
        if payload.opportunities.is_empty() {
            Ok(SearchOutcome::Empty)
        } else {
            Ok(SearchOutcome::Success(payload.opportunities))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SearchWindow;
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    fn request(api_key: &str) -> SearchRequest {
        SearchRequest {
            api_key: api_key.to_string(),
            window: SearchWindow {
                from: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            },
            naics_codes: Some(vec!["312112".to_string()]),
            psc_codes: Some(vec!["8945".to_string()]),
            agencies: vec!["DLA Troop Support".to_string()],
            keywords: None,
            limit: 50,
        }
    }

    #[tokio::test]
    async fn test_search_success_with_results() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .header("accept", "application/json")
                .query_param("api_key", "test-key")
                .query_param("postedFrom", "03/01/2025")
                .query_param("postedTo", "03/31/2025")
                .query_param("naicsCodes", "312112")
                .query_param("limit", "50");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "opportunities": [
                        {
                            "title": "Bottled Water Supply",
                            "noticeId": "N1",
                            "postedDate": "03/10/2025",
                            "responseDeadline": "04/01/2025",
                            "department": {"name": "DLA Troop Support"}
                        }
                    ]
                }));
        });

        let client = SamClient::with_base_url(server.url("/"));
        let outcome = client.search(&request("test-key")).await.unwrap();

        api_mock.assert();
        match outcome {
            SearchOutcome::Success(opportunities) => {
                assert_eq!(opportunities.len(), 1);
                assert_eq!(opportunities[0].title, "Bottled Water Supply");
                assert_eq!(opportunities[0].notice_id, "N1");
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_empty_opportunities_is_empty_outcome() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"opportunities": []}));
        });

        let client = SamClient::with_base_url(server.url("/"));
        let outcome = client.search(&request("test-key")).await.unwrap();

        api_mock.assert();
        assert!(matches!(outcome, SearchOutcome::Empty));
    }

    #[tokio::test]
    async fn test_search_missing_opportunities_field_is_empty_outcome() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"totalRecords": 0}));
        });

        let client = SamClient::with_base_url(server.url("/"));
        let outcome = client.search(&request("test-key")).await.unwrap();

        assert!(matches!(outcome, SearchOutcome::Empty));
    }

    #[tokio::test]
    async fn test_search_forbidden_surfaces_status_and_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(403).body("Forbidden");
        });

        let client = SamClient::with_base_url(server.url("/"));
        let outcome = client.search(&request("bad-key")).await.unwrap();

        api_mock.assert();
        match outcome {
            SearchOutcome::ApiError { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "Forbidden");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_server_error_reported_like_client_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500).body("Internal Server Error");
        });

        let client = SamClient::with_base_url(server.url("/"));
        let outcome = client.search(&request("test-key")).await.unwrap();

        assert!(matches!(
            outcome,
            SearchOutcome::ApiError { status: 500, .. }
        ));
    }
}
