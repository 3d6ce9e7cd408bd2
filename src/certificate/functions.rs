//! The impls and functions
//!
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use log::*;
use x509_parser::parse_x509_certificate;
use x509_parser::pem::parse_x509_pem;
use crate::certificate::CertificateRecord;
use crate::error::CheckError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

impl CertificateRecord {
    /// Decode a base64 blob and parse the certificate in it.
    ///
    /// Whitespace in the blob (line wrapping) is ignored.
    pub fn from_base64(
        blob: &str,
    ) -> Result<CertificateRecord, CheckError>
    {
        let blob: String = blob.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD.decode(blob)
            .map_err(CheckError::base64)?;
        CertificateRecord::from_bytes(&bytes)
    }
    /// Parse DER, or the first certificate of PEM text.
    pub fn from_bytes(
        bytes: &[u8],
    ) -> Result<CertificateRecord, CheckError>
    {
        let start = bytes.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(bytes.len());
        if bytes[start..].starts_with(b"-----BEGIN") {
            let (_, pem) = parse_x509_pem(&bytes[start..])
                .map_err(|e| CheckError::Parse(format!("certificate parse error: {}", e)))?;
            if pem.label != "CERTIFICATE" {
                return Err(CheckError::Parse(format!("certificate parse error: unexpected PEM block {}", pem.label)));
            }
            CertificateRecord::from_der(&pem.contents)
        } else {
            CertificateRecord::from_der(bytes)
        }
    }
    fn from_der(
        der: &[u8],
    ) -> Result<CertificateRecord, CheckError>
    {
        let (_, certificate) = parse_x509_certificate(der)
            .map_err(|e| CheckError::Parse(format!("certificate parse error: {}", e)))?;
        let timestamp = certificate.validity().not_after.timestamp();
        let not_after = DateTime::<Utc>::from_timestamp(timestamp, 0)
            .ok_or_else(|| CheckError::Parse(format!("certificate parse error: not after out of range: {}", timestamp)))?;
        let record = CertificateRecord {
            subject: certificate.subject().to_string(),
            not_after,
        };
        debug!("certificate subject: {}, not after: {}", record.subject, record.not_after);
        Ok(record)
    }
    /// Whole days between the reference time and not after, truncated toward zero.
    pub fn days_remaining(
        &self,
        reference_time: DateTime<Utc>,
    ) -> i64
    {
        (self.not_after - reference_time).num_seconds() / SECONDS_PER_DAY
    }
}

/// Days until the certificate in the base64 blob expires, counted from `reference_time`.
///
/// Negative once the certificate is expired.
pub fn extract_days_remaining(
    blob: &str,
    reference_time: DateTime<Utc>,
) -> Result<i64, CheckError>
{
    let record = CertificateRecord::from_base64(blob)?;
    Ok(record.days_remaining(reference_time))
}
