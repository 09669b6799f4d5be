use crate::domain::model::OpportunityRecord;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes records as CSV. The ID column is only present in the
/// code-filtered export variant.
pub fn write_csv<W: Write>(
    writer: W,
    records: &[OpportunityRecord],
    include_id: bool,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if include_id {
        csv_writer.write_record(["Title", "ID", "Agency", "Posted", "Deadline", "Link"])?;
    } else {
        csv_writer.write_record(["Title", "Agency", "Posted", "Deadline", "Link"])?;
    }

    for record in records {
        if include_id {
            csv_writer.write_record([
                &record.title,
                &record.notice_id,
                &record.agency_name,
                &record.posted_date,
                &record.response_deadline,
                &record.detail_url,
            ])?;
        } else {
            csv_writer.write_record([
                &record.title,
                &record.agency_name,
                &record.posted_date,
                &record.response_deadline,
                &record.detail_url,
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn export_to_path(path: &Path, records: &[OpportunityRecord], include_id: bool) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, records, include_id)?;
    tracing::debug!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}
