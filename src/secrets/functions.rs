//! The impls and functions
//!
use std::time::Instant;
use chrono::{DateTime, Utc};
use log::*;
use reqwest::blocking::Client;
use reqwest::Url;
use anyhow::Result;
use crate::aggregate::{aggregate_parallel, AggregateResult};
use crate::certificate::CertificateRecord;
use crate::error::CheckError;
use crate::threshold::{evaluate, CheckResult, Metric, Polarity, Thresholds};
use crate::utility::{self, Authentication};
use crate::secrets::{RancherOpts, Secret, SecretCheckConfig, SecretOpts, SecretsOpts};

const TLS_CERTIFICATE_KEY: &str = "tls.crt";

impl RancherOpts {
    fn into_config(
        self,
        secrets: Vec<String>,
        mut missing: Vec<&'static str>,
        parallel: usize,
    ) -> Result<SecretCheckConfig, CheckError>
    {
        let url = self.url.filter(|u| !u.is_empty());
        let token = self.token.filter(|t| !t.is_empty());
        let cluster = self.cluster.filter(|c| !c.is_empty());
        let namespace = self.namespace.filter(|n| !n.is_empty());
        // keep the order of the options in the help output.
        let mut missing_rancher: Vec<&'static str> = Vec::new();
        if url.is_none() { missing_rancher.push("url"); }
        if token.is_none() { missing_rancher.push("token"); }
        if cluster.is_none() { missing_rancher.push("cluster"); }
        if namespace.is_none() { missing_rancher.push("namespace"); }
        if self.warning == 0 { missing.push("warning"); }
        if self.critical == 0 { missing.push("critical"); }
        missing_rancher.append(&mut missing);
        if !missing_rancher.is_empty() {
            return Err(CheckError::Argument(missing_rancher.join(", ")));
        }
        let url = url.unwrap_or_default();
        let base_url = Url::parse(&url)
            .map_err(|e| CheckError::Argument(format!("url: invalid URL {}: {}", url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CheckError::Argument(format!("url: invalid URL {}: not a base URL", url)));
        }
        let thresholds = Thresholds::from_options(self.warning, self.critical, Polarity::DescendingBad)?;

        Ok(SecretCheckConfig {
            base_url,
            cluster: cluster.unwrap_or_default(),
            namespace: namespace.unwrap_or_default(),
            secrets,
            authentication: Authentication::Bearer(token.unwrap_or_default()),
            thresholds,
            http: self.http.into_settings()?,
            parallel,
        })
    }
}

impl SecretOpts {
    pub fn into_config(self) -> Result<SecretCheckConfig, CheckError> {
        let secret = self.secret.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let missing = if secret.is_none() { vec!["secret"] } else { Vec::new() };
        self.rancher.into_config(secret.into_iter().collect(), missing, 1)
    }
}

impl SecretsOpts {
    pub fn into_config(self) -> Result<SecretCheckConfig, CheckError> {
        let secrets = split_secret_names(self.secrets.as_deref().unwrap_or_default());
        let missing = if secrets.is_empty() { vec!["secrets"] } else { Vec::new() };
        if self.parallel == 0 {
            return Err(CheckError::Argument("parallel: must be at least 1".to_string()));
        }
        self.rancher.into_config(secrets, missing, self.parallel)
    }
}

/// Split a comma separated list of names, trimming blanks and dropping empty names.
pub fn split_secret_names(names: &str) -> Vec<String> {
    names.split(',')
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

impl SecretCheckConfig {
    /// `<url>/k8s/clusters/<cluster>/api/v1/namespaces/<namespace>/secrets/<secret>`
    ///
    /// The names are percent encoded as path segments.
    pub fn secret_url(
        &self,
        secret_name: &str,
    ) -> Url
    {
        let mut url = self.base_url.clone();
        // base_url is checked to be a base in into_config.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty()
                .extend(["k8s", "clusters", self.cluster.as_str(), "api", "v1", "namespaces", self.namespace.as_str(), "secrets", secret_name]);
        }
        url
    }
}

impl Secret {
    pub fn read_http(
        client: &Client,
        config: &SecretCheckConfig,
        secret_name: &str,
    ) -> Result<Secret, CheckError>
    {
        info!("begin http read: {}", secret_name);
        let timer = Instant::now();

        let data_from_http = utility::http_get(client, config.secret_url(secret_name).as_str(), &[], &config.authentication)?;

        info!("end http read {}: {:?}", secret_name, timer.elapsed());
        Secret::parse_secret(&data_from_http)
    }
    // This is a separate function in order to allow tests to use it.
    fn parse_secret(
        http_data: &str,
    ) -> Result<Secret, CheckError>
    {
        serde_json::from_str(http_data)
            .map_err(CheckError::json)
    }
    /// The base64 encoded `tls.crt`.
    pub fn tls_certificate(&self) -> Result<&str, CheckError> {
        self.data.as_ref()
            .and_then(|data| data.get(TLS_CERTIFICATE_KEY))
            .map(|certificate| certificate.as_str())
            .ok_or_else(|| CheckError::Parse(format!("missing {}", TLS_CERTIFICATE_KEY)))
    }
}

/// Read a secret and return the days until its certificate expires.
pub fn days_remaining(
    client: &Client,
    config: &SecretCheckConfig,
    secret_name: &str,
    reference_time: DateTime<Utc>,
) -> Result<i64, CheckError>
{
    let secret = Secret::read_http(client, config, secret_name)?;
    if let Some(secret_type) = &secret.secret_type {
        debug!("{}: type {}", secret_name, secret_type);
    }
    let certificate = CertificateRecord::from_base64(secret.tls_certificate()?)?;
    let days = certificate.days_remaining(reference_time);
    debug!("{}: subject {}, not after {}, {} days remaining", secret_name, certificate.subject, certificate.not_after, days);
    Ok(days)
}

/// The metric of the single secret plugin.
pub fn secret_metric(
    secret_name: &str,
    namespace: &str,
    days: i64,
) -> Metric
{
    Metric::new(secret_name, days, format!("Certificate '{}' in namespace '{}' expires in {} days", secret_name, namespace, days))
}

/// The metric of an item in the secrets list plugin.
pub fn secret_item_metric(
    secret_name: &str,
    days: i64,
) -> Metric
{
    Metric::new(secret_name, days, format!("{} {} days", secret_name, days))
}

/// Check the first (and only) secret of the configuration.
pub fn check_secret(
    client: &Client,
    config: &SecretCheckConfig,
    reference_time: DateTime<Utc>,
) -> CheckResult
{
    let Some(secret_name) = config.secrets.first() else {
        return CheckResult::from_error(None, &CheckError::Argument("secret".to_string()));
    };
    match days_remaining(client, config, secret_name, reference_time) {
        Ok(days) => evaluate(&secret_metric(secret_name, &config.namespace, days), &config.thresholds, Polarity::DescendingBad),
        Err(error) => {
            warn!("{}: {}", secret_name, error);
            CheckResult::from_error(Some(secret_name), &error)
        }
    }
}

/// Check all secrets of the configuration, in the order given.
///
/// A secret that cannot be read or parsed is CRITICAL, the other secrets are still checked.
/// The error result is only for a failure to set up the parallel evaluation.
pub fn check_secrets(
    client: &Client,
    config: &SecretCheckConfig,
    reference_time: DateTime<Utc>,
) -> Result<AggregateResult>
{
    aggregate_parallel(&config.secrets, config.parallel, |secret_name| {
        let days = days_remaining(client, config, secret_name, reference_time)?;
        Ok(evaluate(&secret_item_metric(secret_name, days), &config.thresholds, Polarity::DescendingBad))
    })
}
