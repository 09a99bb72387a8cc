//! Unified application error type.
//! Ingest, core, export and cli all return AppError so that a bad timeline
//! surfaces the same way no matter which command read it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input documents
    // ---------------------------
    #[error("Invalid timeline JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Timeline data errors
    // ---------------------------
    #[error("Event #{index}: invalid start_time '{value}'")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Event #{index}: duration must be a positive number of hours ending within the calendar, got {value}")]
    InvalidDuration { index: usize, value: f64 },

    #[error("Event #{index}: distance must be a non-negative number of miles, got {value}")]
    InvalidDistance { index: usize, value: f64 },

    #[error("Event #{index}: unknown event type '{value}'")]
    InvalidEventKind { index: usize, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
