use crate::core::registry::{CategoryCodes, RELEVANT_KEYWORDS};
use crate::domain::model::{SearchRequest, SearchWindow};

/// Number of description tokens used as a replay keyword seed.
const KEYWORD_SEED_TOKENS: usize = 6;

/// The three query-construction variants, unified behind one assembler so
/// they cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Interactive scout: classification codes alone drive the filtering.
    CodesOnly,
    /// Replay: keywords seeded from the historical contract's description,
    /// no code filters.
    Replay { description: String },
    /// Fixed domain keyword list with OR semantics plus NAICS codes; PSC
    /// codes only when explicitly enabled.
    KeywordUnion { include_psc: bool },
}

/// Pure construction of the wire request. Inputs arrive already validated
/// (categories resolved, limit clamped), so this cannot fail.
pub fn assemble(
    mode: &SearchMode,
    api_key: &str,
    window: SearchWindow,
    codes: &CategoryCodes,
    agencies: &[String],
    limit: u32,
) -> SearchRequest {
    let (naics_codes, psc_codes, keywords) = match mode {
        SearchMode::CodesOnly => (Some(codes.naics.clone()), Some(codes.psc.clone()), None),
        SearchMode::Replay { description } => (None, None, Some(keyword_seed(description))),
        SearchMode::KeywordUnion { include_psc } => (
            Some(codes.naics.clone()),
            include_psc.then(|| codes.psc.clone()),
            Some(RELEVANT_KEYWORDS.join(" OR ")),
        ),
    };

    SearchRequest {
        api_key: api_key.to_string(),
        window,
        naics_codes,
        psc_codes,
        agencies: agencies.to_vec(),
        keywords,
        limit,
    }
}

/// Naive keyword seed: the first six whitespace-delimited tokens of a
/// contract description, re-joined with single spaces.
pub fn keyword_seed(description: &str) -> String {
    description
        .split_whitespace()
        .take(KEYWORD_SEED_TOKENS)
        .collect::<Vec<_>>()
        .join(" ")
}
