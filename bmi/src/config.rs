use clap::ValueEnum;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per evaluation
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub output_format: OutputFormat,
}

impl CliConfig {
    pub fn new(output_format: OutputFormat) -> Self {
        Self { output_format }
    }
}
