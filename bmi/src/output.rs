use bmi_sdk::BmiReport;
use serde::Serialize;

use crate::{config::OutputFormat, error::CliResult};

#[derive(Debug, Serialize)]
struct LabeledReport<'a> {
    label: &'a str,
    #[serde(flatten)]
    report: &'a BmiReport,
}

/// Render one evaluation. `label` names the subject in the text output,
/// e.g. `Person 1`.
pub fn render_report(label: &str, report: &BmiReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{} BMI: {}, Category: {}",
            label, report.bmi, report.category
        )),
        OutputFormat::Json => Ok(serde_json::to_string(&LabeledReport { label, report })?),
    }
}

pub fn render_error(err: &bmi_sdk::BmiError, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(format!("Error creating HumanBMI: {}", err)),
        OutputFormat::Json => Ok(serde_json::json!({ "error": err.to_string() }).to_string()),
    }
}
