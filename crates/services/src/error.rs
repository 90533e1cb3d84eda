//! Shared error types for the services crate.

use thiserror::Error;

use swell_core::ReportError;

/// Errors emitted by `NoaaReportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportServiceError {
    #[error("report endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("report payload has an invalid lastBuildDate: {raw}")]
    InvalidDate { raw: String },
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors emitted by `AudioStore`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AudioStoreError {
    #[error("audio filename cannot be empty")]
    EmptyFilename,
    #[error("audio storage base is not a valid URL: {raw}")]
    InvalidBase { raw: String },
    #[error("audio filename does not resolve against the storage base: {raw}")]
    Unresolvable { raw: String },
}
