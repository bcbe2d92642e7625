use super::model::DashboardReport;
use crate::errors::AppResult;

/// Pretty-printed JSON of a whole render pass.
pub fn to_json(report: &DashboardReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
