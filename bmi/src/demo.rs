use bmi_sdk::HumanBmi;

use crate::{
    config::CliConfig,
    error::CliResult,
    output::{render_error, render_report},
};

/// (weight kg, height m) pairs evaluated by `demo`. The last one is invalid
/// and shows the error path.
pub const SAMPLES: [(f64, f64); 4] = [(80.0, 1.80), (60.0, 1.75), (100.0, 1.90), (-70.0, 1.70)];

#[derive(Debug, Default, PartialEq)]
pub struct DemoOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

pub fn run_demo(config: &CliConfig) -> CliResult<DemoOutput> {
    let mut out = DemoOutput::default();

    for (i, (weight, height)) in SAMPLES.iter().enumerate() {
        match HumanBmi::new(*weight, *height) {
            Ok(person) => {
                let label = format!("Person {}", i + 1);
                out.stdout
                    .push(render_report(&label, &person.report(), config.output_format)?);
            }
            Err(err) => {
                log::debug!("sample {} rejected: {}", i + 1, err);
                out.stderr.push(render_error(&err, config.output_format)?);
            }
        }
    }

    Ok(out)
}
