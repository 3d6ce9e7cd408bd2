//! The structs
//!
use chrono::{DateTime, Utc};

/// The properties taken from a parsed certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    pub subject: String,
    pub not_after: DateTime<Utc>,
}
