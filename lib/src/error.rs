//! Custom Error and Result types for this library

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{persist::PersistGateBuilderError, service::HttpWorkpadServiceBuilderError};

/// Response carried by a failed request to the workpad service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code returned by the service
    pub status: u16,
    /// Body or reason text returned alongside the status
    pub message: String,
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{}: {}", self.status, self.message)
        }
    }
}

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum WorkpadError {
    /// The workpad service answered with a non-success status
    #[error("workpad service responded with {_0}")]
    Response(ErrorResponse),

    /// The request never produced a response (connection, timeout, tls...)
    #[error("transport error: {_0}")]
    Transport(String),

    /// Error serializing or deserializing json documents
    #[error("json error: {_0}")]
    Json(#[from] serde_json::Error),

    /// Error serializing or deserializing yaml configuration
    #[error("config error: {_0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error reading or writing files
    #[error("io error: {_0}")]
    Io(#[from] std::io::Error),

    /// Error resulting from failure to build the persistence gate
    #[error("failed to build persist gate: {_0}")]
    PersistGateBuild(#[from] PersistGateBuilderError),

    /// Error resulting from failure to build the http workpad service
    #[error("failed to build workpad service: {_0}")]
    ServiceBuild(#[from] HttpWorkpadServiceBuilderError),
}

impl WorkpadError {
    /// Returns the response carried by this error, if the service produced one
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Response(response) => Some(response),
            _ => None,
        }
    }

    /// Returns the status of the carried response, if any
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`WorkpadError`]
pub type Result<T> = std::result::Result<T, WorkpadError>;

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
