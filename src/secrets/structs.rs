//! The structs
//!
use std::collections::BTreeMap;
use clap::{Args, Parser};
use reqwest::Url;
use crate::threshold::Thresholds;
use crate::utility::{Authentication, HttpOpts, HttpSettings};

/// The options shared by both secret plugins.
///
/// Warning and critical are days, 0 means not set.
#[derive(Debug, Clone, Args)]
pub struct RancherOpts {
    /// Rancher base URL (e.g. https://rancher.example.com)
    #[arg(long, env = "RANCHER_URL")]
    pub url: Option<String>,
    /// Rancher API bearer token
    #[arg(long, env = "RANCHER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Cluster name (e.g. local)
    #[arg(long)]
    pub cluster: Option<String>,
    /// Namespace of the secret(s)
    #[arg(long)]
    pub namespace: Option<String>,
    /// Warning threshold in days
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub warning: i64,
    /// Critical threshold in days
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub critical: i64,
    #[command(flatten)]
    pub http: HttpOpts,
}

/// The options of `check_tls_secret`.
#[derive(Debug, Clone, Parser)]
#[command(name = "check_tls_secret", version, about = "Check the expiry of the certificate in a TLS secret")]
pub struct SecretOpts {
    #[command(flatten)]
    pub rancher: RancherOpts,
    /// Secret name
    #[arg(long)]
    pub secret: Option<String>,
}

/// The options of `check_tls_secrets`.
#[derive(Debug, Clone, Parser)]
#[command(name = "check_tls_secrets", version, about = "Check the expiry of the certificates in a list of TLS secrets")]
pub struct SecretsOpts {
    #[command(flatten)]
    pub rancher: RancherOpts,
    /// Comma separated secret names
    #[arg(long)]
    pub secrets: Option<String>,
    /// Number of secrets to read at the same time
    #[arg(long, default_value_t = 1)]
    pub parallel: usize,
}

/// The validated configuration of a secret check.
///
/// The single secret check has exactly one secret.
#[derive(Debug, Clone)]
pub struct SecretCheckConfig {
    pub base_url: Url,
    pub cluster: String,
    pub namespace: String,
    pub secrets: Vec<String>,
    pub authentication: Authentication,
    pub thresholds: Thresholds,
    pub http: HttpSettings,
    pub parallel: usize,
}

/// The root struct for deserializing a secret.
///
/// Only `data` is used. The values in `data` are base64 encoded.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Secret {
    #[serde(rename = "type")]
    pub secret_type: Option<String>,
    pub data: Option<BTreeMap<String, String>>,
}
