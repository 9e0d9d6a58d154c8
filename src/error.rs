use thiserror::Error;

/// Errors surfaced at the crate boundary.
///
/// Scheduling itself never fails; only parsing and export do.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("unknown algorithm tag: {0}")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A type alias that forces the usage of the custom error type.
pub type Result<T> = std::result::Result<T, ScheduleError>;
