//! Module for calculating the number of days until a certificate expires.
//!
//! The certificate is provided as base64, the way it is stored in the `data` map of a Kubernetes secret.
//! After base64 decoding, the bytes are either:
//! - a DER encoded X.509 certificate.
//! - PEM text (`-----BEGIN CERTIFICATE-----`), which is what `tls.crt` in a secret of type
//!   `kubernetes.io/tls` contains. The first PEM block is used.
//!
//! The number of days is truncated toward zero: a certificate expiring in 23 hours has 0 days left,
//! a certificate expired 25 hours ago has -1.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
