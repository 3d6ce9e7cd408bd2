//! Test fixtures
//!
//! A self signed certificate for `CN=ingress.example.internal`,
//! valid from 2025-01-01 00:00:00 UTC until 2030-01-01 00:00:00 UTC (`tests/fixtures/ingress.pem`).

/// The DER encoded certificate, base64 encoded.
pub const CERTIFICATE_DER_BASE64: &str = include_str!("../tests/fixtures/ingress_der.b64");
/// The PEM text of the certificate, base64 encoded, as it is stored in `tls.crt` of a secret.
pub const CERTIFICATE_PEM_BASE64: &str = include_str!("../tests/fixtures/ingress_pem.b64");
