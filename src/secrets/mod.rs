//! Module for checking the expiry of the certificate in a Kubernetes TLS secret.
//!
//! The secret is read through the Rancher Kubernetes API proxy:
//! `<url>/k8s/clusters/<cluster>/api/v1/namespaces/<namespace>/secrets/<secret>`,
//! which returns the secret object:
//! ```text
//! {
//!   "apiVersion": "v1",
//!   "kind": "Secret",
//!   "metadata": { "name": "web-tls", "namespace": "ingress" },
//!   "type": "kubernetes.io/tls",
//!   "data": { "tls.crt": "LS0tLS1CRUdJTi...", "tls.key": "LS0tLS1CRUdJTi..." }
//! }
//! ```
//! The metric is the number of days until the certificate in `tls.crt` expires, a lower number is worse.
//! Authentication is a bearer token.
//!
//! There are two plugins:
//! - `check_tls_secret`: a single secret.
//! - `check_tls_secrets`: a comma separated list of secrets, reported as one aggregated result.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
