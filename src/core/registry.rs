use crate::utils::error::{Result, ScoutError};

/// Category name → (NAICS codes, PSC codes). Process-wide constant,
/// never mutated; codes are opaque strings as far as this tool cares.
const CATEGORY_CODE_MAP: &[(&str, &[&str], &[&str])] = &[
    ("Bottled water", &["312112"], &["8945"]),
    ("Office Supplies", &["339940"], &["7510", "7520"]),
    ("Stainless Steel Sheets", &["331110"], &["9515"]),
    ("Aerospace Metals", &["336413"], &["1560"]),
    ("Emergency Kits", &["339113"], &["6545"]),
    ("Logistics Services", &["484110"], &["V112", "V119"]),
    ("Custom Pallets & Crates", &["321920"], &["8115", "3990"]),
    ("Construction Materials", &["327320", "321999"], &["5610", "5615"]),
    ("Produce (Fruits & Vegetables)", &["424480", "311991"], &["8915"]),
    ("Janitorial Supplies", &["325612"], &["7920", "7930"]),
];

/// Default agency selection for interactive searches.
pub const TARGET_AGENCIES: &[&str] = &[
    "Defense Commissary Agency",
    "DLA Troop Support",
    "Department of Defense",
    "Department of Agriculture",
    "Department of Veterans Affairs",
    "Department of Homeland Security",
    "Bureau of Prisons",
    "Federal Emergency Management Agency",
];

/// Fixed keyword list for keyword-union searches.
pub const RELEVANT_KEYWORDS: &[&str] = &[
    "food",
    "produce",
    "delivery",
    "supplies",
    "fruits",
    "vegetables",
    "water",
    "packaging",
    "transport",
    "logistics",
    "kits",
    "facility",
    "cleaning",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCodes {
    pub naics: Vec<String>,
    pub psc: Vec<String>,
}

pub fn category_names() -> Vec<&'static str> {
    CATEGORY_CODE_MAP.iter().map(|(name, _, _)| *name).collect()
}

/// Collects the classification codes for the requested categories, in
/// registry order per category. Duplicate codes across categories are kept
/// as-is; the API tolerates repeated comma-separated values. With
/// `include_psc` false the PSC side is left empty to avoid over-filtering.
pub fn codes_for(categories: &[String], include_psc: bool) -> Result<CategoryCodes> {
    let mut codes = CategoryCodes::default();

    for category in categories {
        let (_, naics, psc) = CATEGORY_CODE_MAP
            .iter()
            .find(|(name, _, _)| *name == category.as_str())
            .ok_or_else(|| ScoutError::UnknownCategory {
                name: category.clone(),
            })?;

        codes.naics.extend(naics.iter().map(|c| c.to_string()));
        if include_psc {
            codes.psc.extend(psc.iter().map(|c| c.to_string()));
        }
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottled_water_codes() {
        let codes = codes_for(&["Bottled water".to_string()], true).unwrap();
        assert_eq!(codes.naics, vec!["312112"]);
        assert_eq!(codes.psc, vec!["8945"]);
    }

    #[test]
    fn test_unknown_category_fails() {
        let result = codes_for(&["Submarines".to_string()], true);
        assert!(matches!(
            result,
            Err(ScoutError::UnknownCategory { ref name }) if name == "Submarines"
        ));
    }

    #[test]
    fn test_codes_concatenate_in_registry_order() {
        let categories = vec![
            "Office Supplies".to_string(),
            "Construction Materials".to_string(),
        ];
        let codes = codes_for(&categories, true).unwrap();
        assert_eq!(codes.naics, vec!["339940", "327320", "321999"]);
        assert_eq!(codes.psc, vec!["7510", "7520", "5610", "5615"]);
    }

    #[test]
    fn test_include_psc_false_leaves_psc_empty() {
        let codes = codes_for(&["Logistics Services".to_string()], false).unwrap();
        assert_eq!(codes.naics, vec!["484110"]);
        assert!(codes.psc.is_empty());
    }

    // Documents current behavior: repeated selections repeat their codes.
    #[test]
    fn duplicate_codes_are_preserved() {
        let categories = vec!["Bottled water".to_string(), "Bottled water".to_string()];
        let codes = codes_for(&categories, true).unwrap();
        assert_eq!(codes.naics, vec!["312112", "312112"]);
        assert_eq!(codes.psc, vec!["8945", "8945"]);
    }

    #[test]
    fn test_empty_selection_yields_empty_codes() {
        let codes = codes_for(&[], true).unwrap();
        assert!(codes.naics.is_empty());
        assert!(codes.psc.is_empty());
    }

    #[test]
    fn test_category_names_match_registry() {
        let names = category_names();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"Bottled water"));
        assert!(names.contains(&"Janitorial Supplies"));
    }
}
