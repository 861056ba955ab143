use bmi_sdk::HumanBmi;

use crate::{
    config::CliConfig,
    error::CliResult,
    output::{render_error, render_report},
};

/// Result of evaluating one measurement from the command line
#[derive(Debug, PartialEq)]
pub enum CalcOutput {
    /// Line for stdout
    Evaluated(String),
    /// Line for stderr; the process exits with failure
    Rejected(String),
}

impl CalcOutput {
    pub fn is_success(&self) -> bool {
        matches!(self, CalcOutput::Evaluated(_))
    }
}

pub fn run_calc(config: &CliConfig, weight: f64, height: f64) -> CliResult<CalcOutput> {
    match HumanBmi::new(weight, height) {
        Ok(person) => {
            log::info!("evaluating weight={} height={}", weight, height);
            let line = render_report("Person", &person.report(), config.output_format)?;
            Ok(CalcOutput::Evaluated(line))
        }
        Err(err) => Ok(CalcOutput::Rejected(render_error(
            &err,
            config.output_format,
        )?)),
    }
}
