use chrono::NaiveDate;
use thiserror::Error;

/// Rejected date selections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateSelectionError {
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    Parse(String),

    #[error("{date} is before the earliest selectable date {earliest}")]
    TooOld { date: NaiveDate, earliest: NaiveDate },

    #[error("{date} is after today ({today})")]
    InFuture { date: NaiveDate, today: NaiveDate },
}

/// Rejected report schedules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Please add at least one recipient")]
    NoRecipients,

    #[error("Invalid delivery time {0:?}, expected HH:MM")]
    InvalidTime(String),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("No digest loaded; run the processing sequence first")]
    NoDigest,

    #[error("Cluster not found: {0}")]
    ClusterNotFound(String),

    #[error("Processing was cancelled")]
    Cancelled,

    #[error("Please add at least one email recipient")]
    NoRecipients,

    #[error(transparent)]
    Date(#[from] DateSelectionError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("Export failed: {0}")]
    Export(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
