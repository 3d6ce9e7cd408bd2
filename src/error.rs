//! The error taxonomy of the plugins.
//!
//! Only [CheckError::Argument] is fatal for a whole run and maps to UNKNOWN.
//! Every other variant belongs to the single item being evaluated and maps to CRITICAL.
use thiserror::Error;
use crate::status::Status;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Required input missing or invalid, detected before any request is made.
    #[error("Missing required arguments: {0}")]
    Argument(String),
    /// The request could not be built or sent, or the body could not be read.
    #[error("API error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with something else than HTTP 200.
    #[error("API returned HTTP {0}")]
    HttpStatus(u16),
    /// Malformed JSON or base64.
    #[error("{what} decode error: {reason}")]
    Decode { what: &'static str, reason: String },
    /// Malformed certificate, or an expected field is absent.
    #[error("{0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Transport,
    HttpStatus,
    Decode,
    Parse,
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Argument(_) => ErrorKind::Argument,
            CheckError::Transport(_) => ErrorKind::Transport,
            CheckError::HttpStatus(_) => ErrorKind::HttpStatus,
            CheckError::Decode { .. } => ErrorKind::Decode,
            CheckError::Parse(_) => ErrorKind::Parse,
        }
    }
    /// The plugin status an error is reported with.
    pub fn status(&self) -> Status {
        match self.kind() {
            ErrorKind::Argument => Status::Unknown,
            _ => Status::Critical,
        }
    }
    pub fn json(error: serde_json::Error) -> Self {
        CheckError::Decode { what: "JSON", reason: error.to_string() }
    }
    pub fn base64(error: base64::DecodeError) -> Self {
        CheckError::Decode { what: "base64", reason: error.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_argument_error_is_unknown() {
        let error = CheckError::Argument("--token".to_string());
        assert_eq!(error.kind(), ErrorKind::Argument);
        assert_eq!(error.status(), Status::Unknown);
        assert_eq!(error.to_string(), "Missing required arguments: --token");
    }

    #[test]
    fn unit_item_errors_are_critical() {
        assert_eq!(CheckError::HttpStatus(404).status(), Status::Critical);
        assert_eq!(CheckError::HttpStatus(404).to_string(), "API returned HTTP 404");
        assert_eq!(CheckError::Parse("missing tls.crt".to_string()).status(), Status::Critical);
    }

    #[test]
    fn unit_json_error_is_decode() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = CheckError::json(json_error);
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert!(error.to_string().starts_with("JSON decode error: "));
    }
}
