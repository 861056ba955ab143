use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}
