use crate::domain::model::{OpportunityRecord, RawOpportunity};

/// Base of the public detail-page link.
pub const OPPORTUNITY_LINK_BASE: &str = "https://sam.gov/opp";

pub fn detail_url(notice_id: &str) -> String {
    format!("{}/{}/view", OPPORTUNITY_LINK_BASE, notice_id)
}

/// Flattens raw API opportunities into display records. Total: missing
/// fields become empty strings, input order and count are preserved.
pub fn normalize(raw: &[RawOpportunity]) -> Vec<OpportunityRecord> {
    raw.iter()
        .map(|opportunity| OpportunityRecord {
            title: opportunity.title.clone(),
            agency_name: opportunity
                .department
                .as_ref()
                .map(|d| d.name.clone())
                .unwrap_or_default(),
            posted_date: opportunity.posted_date.clone(),
            response_deadline: opportunity.response_deadline.clone(),
            notice_id: opportunity.notice_id.clone(),
            detail_url: detail_url(&opportunity.notice_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Department;

    #[test]
    fn test_normalize_full_record() {
        let raw = vec![RawOpportunity {
            title: "Bottled Water Supply".to_string(),
            notice_id: "N1".to_string(),
            posted_date: "03/10/2025".to_string(),
            response_deadline: "04/01/2025".to_string(),
            department: Some(Department {
                name: "DLA Troop Support".to_string(),
            }),
        }];

        let records = normalize(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Bottled Water Supply");
        assert_eq!(records[0].agency_name, "DLA Troop Support");
        assert_eq!(records[0].posted_date, "03/10/2025");
        assert_eq!(records[0].response_deadline, "04/01/2025");
        assert_eq!(records[0].detail_url, "https://sam.gov/opp/N1/view");
    }

    #[test]
    fn test_normalize_missing_department_yields_empty_agency() {
        let raw = vec![RawOpportunity {
            title: "T".to_string(),
            notice_id: "N1".to_string(),
            ..Default::default()
        }];

        let records = normalize(&raw);
        assert_eq!(records[0].title, "T");
        assert_eq!(records[0].agency_name, "");
        assert_eq!(records[0].notice_id, "N1");
        assert_eq!(records[0].detail_url, "https://sam.gov/opp/N1/view");
    }

    // A missing notice id produces a malformed link; not corrected here.
    #[test]
    fn test_normalize_missing_notice_id_keeps_malformed_link() {
        let raw = vec![RawOpportunity::default()];
        let records = normalize(&raw);
        assert_eq!(records[0].detail_url, "https://sam.gov/opp//view");
    }

    #[test]
    fn test_normalize_preserves_order_and_count() {
        let raw: Vec<RawOpportunity> = (0..5)
            .map(|i| RawOpportunity {
                notice_id: format!("N{}", i),
                ..Default::default()
            })
            .collect();

        let records = normalize(&raw);
        assert_eq!(records.len(), raw.len());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.notice_id, format!("N{}", i));
        }
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize(&[]).is_empty());
    }
}
