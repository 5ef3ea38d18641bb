//! Error and Result module.
use core::fmt;
use hyper::header::{InvalidHeaderName, InvalidHeaderValue};
use hyper::StatusCode;
use std::{convert::Infallible, error::Error as StdError};
use std::{fmt::Display, result};

/// A `Result` typedef to use with the `cloudfiles-rsc::error` type
pub type Result<T> = result::Result<T, Error>;

/// inducate an illegal variable was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError(String);

impl ValueError {
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }
}

impl Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value error: {}", self.0)
    }
}

impl StdError for ValueError {}

impl From<&str> for ValueError {
    fn from(err: &str) -> Self {
        Self(err.to_string())
    }
}

impl From<String> for ValueError {
    fn from(err: String) -> Self {
        Self(err)
    }
}

impl From<InvalidHeaderValue> for ValueError {
    fn from(err: InvalidHeaderValue) -> Self {
        return ValueError(err.to_string());
    }
}

impl From<InvalidHeaderName> for ValueError {
    fn from(err: InvalidHeaderName) -> Self {
        return ValueError(err.to_string());
    }
}

impl From<Infallible> for ValueError {
    fn from(err: Infallible) -> Self {
        return ValueError(err.to_string());
    }
}

/// JSON parsing error.
#[derive(Debug)]
pub struct JsonError(String);

impl Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "jsonerror: {}", self.0)
    }
}

impl StdError for JsonError {}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// Swift service returned error response.
///
/// Swift answers errors with a status code and a short plain text or html body.
#[derive(Debug)]
pub struct SwiftError {
    pub status: StatusCode,
    pub message: String,
    pub container_name: Option<String>,
}

impl SwiftError {
    pub(crate) fn new<T: Into<String>>(
        status: StatusCode,
        message: T,
        container_name: Option<String>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            container_name,
        }
    }
}

impl std::fmt::Display for SwiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.container_name {
            Some(name) => write!(
                f,
                "SwiftError: {} on container {}: {}",
                self.status, name, self.message
            ),
            None => write!(f, "SwiftError: {}: {}", self.status, self.message),
        }
    }
}

impl StdError for SwiftError {}

#[derive(Debug)]
pub enum Error {
    /// inducate an illegal variable was used.
    ValueError(String),

    /// indicate JSON parsing error.
    JsonError(JsonError),

    /// indicate Swift service returned error response.
    SwiftError(SwiftError),

    /// indicate conncet to Swift service failed.
    HttpError(reqwest::Error),

    /// indicate the http response returned is not expected by Swift.
    UnknownResponse(reqwest::Response),

    /// indicate the operation is declared but not supported by the service.
    Unsupported(&'static str),

    /// indicate a container could not be deleted because it still holds objects.
    ContainerNotEmpty(String),
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::HttpError(e) => e.source(),
            Error::SwiftError(e) => e.source(),
            _ => None,
        }
    }
}

#[rustfmt::skip]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            Error::ValueError(e) => write!(f, "value error: {}", e),
            Error::JsonError(e) => write!(f, "{}", e),
            Error::SwiftError(e) => write!(f, "{}", e),
            Error::HttpError(e) => write!(f, "{}", e),
            Error::UnknownResponse(e) => write!(f, "Unexpected HTTP responses, status: {}", e.status()),
            Error::Unsupported(op) => write!(f, "unsupported operation: {}", op),
            Error::ContainerNotEmpty(name) => write!(f, "container {} is not empty", name),
        }
    }
}

impl From<SwiftError> for Error {
    fn from(err: SwiftError) -> Self {
        Error::SwiftError(err)
    }
}

impl<T: Into<ValueError>> From<T> for Error {
    fn from(err: T) -> Self {
        Error::ValueError(err.into().0)
    }
}

impl From<JsonError> for Error {
    fn from(err: JsonError) -> Self {
        Error::JsonError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::JsonError(err.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Self::ValueError(err.to_string());
        }
        Self::HttpError(err)
    }
}

impl From<reqwest::Response> for Error {
    fn from(err: reqwest::Response) -> Self {
        Self::UnknownResponse(err)
    }
}
