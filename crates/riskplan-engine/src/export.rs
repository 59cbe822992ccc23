//! Plan and controls export
//!
//! Two stable formats: the full plan as pretty JSON, and the detail
//! table as CSV with one row per record. Field naming is part of the
//! contract and must not drift between versions.

use crate::plan::Plan;
use crate::table::RiskRecord;
use crate::RiskResult;
use std::path::Path;
use tracing::info;

/// Serialize a plan to pretty JSON
pub fn plan_to_json(plan: &Plan) -> RiskResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Write a plan to a JSON file
pub fn write_plan_json(path: impl AsRef<Path>, plan: &Plan) -> RiskResult<()> {
    let path = path.as_ref();
    std::fs::write(path, plan_to_json(plan)?)?;
    info!("wrote risk plan to {}", path.display());
    Ok(())
}

/// Serialize the detail table to CSV, header row first
pub fn controls_to_csv(records: &[RiskRecord]) -> RiskResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the detail table to a CSV file
pub fn write_controls_csv(path: impl AsRef<Path>, records: &[RiskRecord]) -> RiskResult<()> {
    let path = path.as_ref();
    std::fs::write(path, controls_to_csv(records)?)?;
    info!("wrote {} control rows to {}", records.len(), path.display());
    Ok(())
}
