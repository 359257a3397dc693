//! Error type definitions.
//!
//! This module defines the typed errors surfaced to callers and the event
//! types counted by `ProcessingStats`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error preparing the log output (e.g., file creation).
    #[error("Logger initialization error: {0}")]
    LoggerSetupError(String),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured request header could not be encoded.
    #[error("Invalid request header {name}: {reason}")]
    InvalidHeader {
        /// Header name
        name: String,
        /// Why the header was rejected
        reason: String,
    },
}

/// Error types for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating the output directory or file failed.
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV row failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing the JSON document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Building or saving the Excel workbook failed.
    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

/// Failures absorbed during a run.
///
/// Each of these leaves a hole in the output (a page with zero records, a
/// candidate with `error` status) but never stops the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Page retrieval, counted once per page after the retry budget is spent
    PageFetchTimeout,
    PageFetchConnect,
    PageFetchStatus,
    PageFetchOther,
    // Availability probe failed or timed out
    DomainProbeError,
}

/// Data dropped during extraction or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    ListingWithoutName,    // Listing element skipped, no usable company name
    InvalidEmailDropped,   // Email field failed validation
    InvalidWebsiteDropped, // Website field failed validation
    InvalidDomainSkipped,  // variant + tld failed domain syntax validation
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::PageFetchTimeout => "Page fetch timeout",
            ErrorType::PageFetchConnect => "Page fetch connect error",
            ErrorType::PageFetchStatus => "Page fetch HTTP status error",
            ErrorType::PageFetchOther => "Page fetch other error",
            ErrorType::DomainProbeError => "Domain probe error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::ListingWithoutName => "Listing without company name",
            WarningType::InvalidEmailDropped => "Invalid email dropped",
            WarningType::InvalidWebsiteDropped => "Invalid website dropped",
            WarningType::InvalidDomainSkipped => "Invalid domain candidate skipped",
        }
    }
}
