use crate::domain::model::HistoricalContract;
use crate::utils::error::{Result, ScoutError};
use std::path::Path;

/// Loads historical awards from a CSV with columns
/// `title, agency, award_date, contractor, category, description`.
pub fn load_contracts(path: &Path) -> Result<Vec<HistoricalContract>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut contracts = Vec::new();

    for row in reader.deserialize() {
        let contract: HistoricalContract = row?;
        contracts.push(contract);
    }

    tracing::debug!("Loaded {} historical contracts", contracts.len());
    Ok(contracts)
}

/// Exact-title lookup, mirroring a selection from the loaded list.
pub fn find_contract<'a>(
    contracts: &'a [HistoricalContract],
    title: &str,
) -> Result<&'a HistoricalContract> {
    contracts
        .iter()
        .find(|contract| contract.title == title)
        .ok_or_else(|| ScoutError::ContractNotFound {
            title: title.to_string(),
        })
}
