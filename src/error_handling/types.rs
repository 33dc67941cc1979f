//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::{categorize_reqwest_error, categorize_status};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for page fetching.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// URL that was requested
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Final URL after redirects
        url: String,
        /// Status code received
        status: u16,
    },

    /// The response body exceeded the configured size limit.
    #[error("Response body from {url} exceeds {limit} bytes")]
    BodyTooLarge {
        /// Final URL after redirects
        url: String,
        /// Configured limit in bytes
        limit: usize,
    },
}

impl FetchError {
    /// Categorizes this failure for logging.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchError::Request { source, .. } => categorize_reqwest_error(source),
            FetchError::Status { status, .. } => categorize_status(*status),
            FetchError::BodyTooLarge { .. } => ErrorType::HttpResponseTooLarge,
        }
    }
}

/// Error types for a complete audit (validate, fetch, analyze).
///
/// Analysis itself cannot fail: extraction falls back to empty values for
/// anything it does not recognize.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The URL was missing, too long, unparsable or not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page could not be fetched.
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] FetchError),
}

impl AuditError {
    /// HTTP status code the audit endpoint answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuditError::InvalidUrl(_) => 400,
            AuditError::Fetch(_) => 500,
        }
    }

    /// Category of the underlying fetch failure, if any.
    pub fn error_type(&self) -> Option<ErrorType> {
        match self {
            AuditError::InvalidUrl(_) => None,
            AuditError::Fetch(e) => Some(e.error_type()),
        }
    }
}

/// Categories of fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    // Specific HTTP status code errors
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Body larger than the configured limit
    HttpResponseTooLarge,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::HttpResponseTooLarge => "Response body too large",
        }
    }
}
