use std::error::Error as StdError;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the `web` layer.
/// Modeled as a root `Error` holding a tree of `error_kind` enums, with the
/// original failure kept in `source`. Request-side kinds are turned into HTTP
/// responses by `IntoResponse`; server-side kinds are only ever logged.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Request(RequestErrorKind),
    Server(ServerErrorKind),
}

/// Failures caused by what a client sent.
#[derive(Debug, PartialEq)]
pub enum RequestErrorKind {
    Decode,
}

/// Failures of the listener itself.
#[derive(Debug, PartialEq)]
pub enum ServerErrorKind {
    Bind,
    Serve,
    AlreadyStarted,
}

impl Error {
    pub fn bind(err: std::io::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Server(ServerErrorKind::Bind),
        }
    }

    pub fn serve(err: std::io::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Server(ServerErrorKind::Serve),
        }
    }

    pub fn already_started() -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Server(ServerErrorKind::AlreadyStarted),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Request(RequestErrorKind::Decode) => write!(f, "malformed request body"),
            ErrorKind::Server(ServerErrorKind::Bind) => write!(f, "failed to bind listener"),
            ErrorKind::Server(ServerErrorKind::Serve) => write!(f, "server error"),
            ErrorKind::Server(ServerErrorKind::AlreadyStarted) => {
                write!(f, "server has already been started")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {source}", self.error_kind),
            None => write!(f, "{}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.error_kind {
            ErrorKind::Request(RequestErrorKind::Decode) => {
                (StatusCode::BAD_REQUEST, "BAD REQUEST").into_response()
            }
            ErrorKind::Server(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Request(RequestErrorKind::Decode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> Error {
        serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_json_errors_translate_to_decode_kind() {
        let err = decode_error();
        assert_eq!(
            err.error_kind,
            ErrorKind::Request(RequestErrorKind::Decode)
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_error_responds_with_bad_request() {
        let response = decode_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_respond_with_internal_server_error() {
        let response = Error::already_started().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_includes_kind_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::bind(io);
        assert_eq!(err.to_string(), "failed to bind listener: address in use");

        assert_eq!(
            Error::already_started().to_string(),
            "server has already been started"
        );
    }
}
