use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire date format required by the SAM.gov search API.
pub const WIRE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Posted-date range for a search, always emitted as MM/DD/YYYY on the wire
/// regardless of how it was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl SearchWindow {
    pub fn posted_from(&self) -> String {
        self.from.format(WIRE_DATE_FORMAT).to_string()
    }

    pub fn posted_to(&self) -> String {
        self.to.format(WIRE_DATE_FORMAT).to_string()
    }
}

/// Fully assembled query, constructed fresh per search and never persisted.
///
/// `None` on a code axis means the parameter is omitted from the request
/// entirely; `Some` with an empty list still emits the parameter with an
/// empty value, which the API treats as "no filter on this axis".
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub api_key: String,
    pub window: SearchWindow,
    pub naics_codes: Option<Vec<String>>,
    pub psc_codes: Option<Vec<String>>,
    pub agencies: Vec<String>,
    pub keywords: Option<String>,
    pub limit: u32,
}

impl SearchRequest {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("limit", self.limit.to_string()),
            ("postedFrom", self.window.posted_from()),
            ("postedTo", self.window.posted_to()),
        ];

        if let Some(codes) = &self.naics_codes {
            params.push(("naicsCodes", codes.join(",")));
        }
        if let Some(codes) = &self.psc_codes {
            params.push(("pscCodes", codes.join(",")));
        }
        if !self.agencies.is_empty() {
            params.push(("agencies", self.agencies.join(",")));
        }
        if let Some(keywords) = &self.keywords {
            params.push(("keywords", keywords.clone()));
        }

        params
    }
}

/// One opportunity as the API returns it. Anything can be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOpportunity {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "noticeId", default)]
    pub notice_id: String,
    #[serde(rename = "postedDate", default)]
    pub posted_date: String,
    #[serde(rename = "responseDeadline", default)]
    pub response_deadline: String,
    #[serde(default)]
    pub department: Option<Department>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    pub name: String,
}

/// Flat record for display and CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub title: String,
    pub agency_name: String,
    pub posted_date: String,
    pub response_deadline: String,
    pub notice_id: String,
    pub detail_url: String,
}

/// One row from a historical-awards CSV (replay mode input).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalContract {
    pub title: String,
    pub agency: String,
    pub award_date: String,
    pub contractor: String,
    pub category: String,
    pub description: String,
}

/// Client-level outcome of one search call. `Empty` is a valid zero-result
/// outcome, distinct from an API error; non-200 statuses carry the raw
/// status and body for verbatim display.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Success(Vec<RawOpportunity>),
    Empty,
    ApiError { status: u16, body: String },
}

/// Engine-level outcome, after normalization.
#[derive(Debug, Clone)]
pub enum ScoutOutcome {
    Found(Vec<OpportunityRecord>),
    Empty,
    ApiError { status: u16, body: String },
}
