use thiserror::Error;

use crate::slice::Advisory;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum QcewError {
    /// An error occurred while building or sending an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Spooling a downloaded body to disk or reading it back failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The downloaded payload could not be decoded as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The transfer never produced a response (DNS, connect, timeout, broken body).
    #[error("Transfer failed for {url}: {message}")]
    Transfer {
        /// The URL that was being downloaded.
        url: String,
        /// Description of the transport failure.
        message: String,
    },

    /// Request parameters were rejected under strict validation.
    #[error("invalid request parameters: {}", join_advisories(.0))]
    InvalidInput(Vec<Advisory>),

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

fn join_advisories(advisories: &[Advisory]) -> String {
    advisories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
