//! The impls and functions
//!
use std::time::Instant;
use log::*;
use reqwest::blocking::Client;
use crate::error::CheckError;
use crate::threshold::{evaluate, CheckResult, Metric, Polarity, Thresholds};
use crate::utility::{self, Authentication};
use crate::volumes::{SvmReference, Volume, VolumeCheckConfig, VolumeOpts, Volumes};

const VOLUMES_ENDPOINT: &str = "api/storage/volumes";

impl VolumeOpts {
    /// Validate the options into the configuration of the check.
    ///
    /// All missing options are reported at once.
    pub fn into_config(self) -> Result<VolumeCheckConfig, CheckError> {
        let mut missing: Vec<&str> = Vec::new();
        if self.username.as_deref().unwrap_or_default().is_empty() { missing.push("username"); }
        if self.password.as_deref().unwrap_or_default().is_empty() { missing.push("password"); }
        if self.warning == 0 { missing.push("warning"); }
        if self.critical == 0 { missing.push("critical"); }
        let api_url = match (self.api_url.filter(|u| !u.is_empty()), self.hostname.filter(|h| !h.is_empty())) {
            (Some(api_url), _) => api_url,
            (None, Some(hostname)) => format!("https://{}/{}", hostname, VOLUMES_ENDPOINT),
            (None, None) => {
                missing.push("hostname or api-url");
                String::new()
            }
        };
        if !missing.is_empty() {
            return Err(CheckError::Argument(missing.join(", ")));
        }
        let thresholds = Thresholds::from_options(self.warning, self.critical, Polarity::AscendingBad)?;

        Ok(VolumeCheckConfig {
            api_url,
            svm: self.svm,
            authentication: Authentication::Basic {
                username: self.username.unwrap_or_default(),
                password: self.password.unwrap_or_default(),
            },
            thresholds,
            http: self.http.into_settings()?,
        })
    }
}

impl Volumes {
    pub fn read_http(
        client: &Client,
        config: &VolumeCheckConfig,
    ) -> Result<Volumes, CheckError>
    {
        info!("begin http read");
        let timer = Instant::now();

        let data_from_http = utility::http_get(client, &config.api_url, &[("svm.name", config.svm.as_str())], &config.authentication)?;

        info!("end http read {:?}", timer.elapsed());
        Volumes::parse_volumes(&data_from_http)
    }
    // This is a separate function in order to allow tests to use it.
    fn parse_volumes(
        http_data: &str,
    ) -> Result<Volumes, CheckError>
    {
        let volumes: Volumes = serde_json::from_str(http_data)
            .map_err(CheckError::json)?;
        for volume in &volumes.records {
            debug!("{:?}", volume);
        }
        if let Some(num_records) = volumes.num_records {
            if num_records != volumes.records.len() as u64 {
                warn!("num_records {} differs from the number of records returned {}", num_records, volumes.records.len());
            }
        }
        Ok(volumes)
    }
    pub fn count(&self) -> i64 {
        self.records.len() as i64
    }
}

impl Volume {
    pub fn svm_name(&self) -> Option<&str> {
        match self.svm.as_ref()? {
            SvmReference::Name(name) => Some(name),
            SvmReference::Object { name } => Some(name),
        }
    }
}

pub fn volume_count_metric(count: i64) -> Metric {
    Metric::new("volumes", count, format!("{} volumes", count))
}

/// Read the volumes of the SVM and evaluate the count.
///
/// Any failure to obtain the count is reported as CRITICAL.
pub fn check_volumes(
    client: &Client,
    config: &VolumeCheckConfig,
) -> CheckResult
{
    match Volumes::read_http(client, config).map(|volumes| volumes.count()) {
        Ok(count) => evaluate(&volume_count_metric(count), &config.thresholds, Polarity::AscendingBad),
        Err(error) => {
            warn!("{}: {}", config.api_url, error);
            CheckResult::from_error(None, &error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::error::ErrorKind;
    use crate::status::Status;

    #[test]
    fn unit_parse_volumes_svm_object() {
        let json = r#"
{
  "records": [
    { "uuid": "028baa66-41bd-11e9-81d5-00a0986138f7", "name": "vol_data1", "svm": { "name": "vserver1", "uuid": "02c9e252-41be-11e9-81d5-00a0986138f7" } },
    { "uuid": "0350a2f4-41bd-11e9-81d5-00a0986138f7", "name": "vol_data2", "svm": { "name": "vserver1" } },
    { "uuid": "0a2b6c3e-41bd-11e9-81d5-00a0986138f7", "name": "vol_data3", "svm": { "name": "vserver1" } }
  ],
  "num_records": 3,
  "_links": { "self": { "href": "/api/storage/volumes?svm.name=vserver1" } }
}
        "#;
        let result = Volumes::parse_volumes(json).unwrap();
        assert_eq!(result.count(), 3);
        assert_eq!(result.records[0].name, "vol_data1");
        assert_eq!(result.records[0].svm_name(), Some("vserver1"));
    }

    #[test]
    fn unit_parse_volumes_svm_name() {
        let json = r#"{"records":[{"name":"vol1","svm":"vserver1"},{"name":"vol2"}]}"#;
        let result = Volumes::parse_volumes(json).unwrap();
        assert_eq!(result.count(), 2);
        assert_eq!(result.records[0].svm_name(), Some("vserver1"));
        assert_eq!(result.records[1].svm_name(), None);
    }

    #[test]
    fn unit_parse_volumes_empty() {
        let result = Volumes::parse_volumes(r#"{"records":[],"num_records":0}"#).unwrap();
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn unit_parse_volumes_missing_records() {
        let error = Volumes::parse_volumes(r#"{"error":{"message":"not authorized","code":"6"}}"#).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Decode);
    }

    #[test]
    fn unit_parse_volumes_not_json() {
        let error = Volumes::parse_volumes("<html>login</html>").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Decode);
    }

    #[test]
    fn unit_options_into_config() {
        let opts = VolumeOpts::try_parse_from([
            "check_netapp_vols", "-u", "monitor", "-p", "secret", "-w", "10", "-c", "20", "-v", "svm_prod", "-H", "cluster1.example.internal",
        ]).unwrap();
        let config = opts.into_config().unwrap();
        assert_eq!(config.api_url, "https://cluster1.example.internal/api/storage/volumes");
        assert_eq!(config.svm, "svm_prod");
        assert_eq!(config.thresholds, Thresholds::new(10, 20));
        assert_eq!(config.authentication, Authentication::Basic { username: "monitor".to_string(), password: "secret".to_string() });
    }

    #[test]
    fn unit_options_api_url_overrides_hostname() {
        let opts = VolumeOpts::try_parse_from([
            "check_netapp_vols", "-u", "monitor", "-p", "secret", "-w", "10", "-c", "20",
            "-H", "ignored.example.internal", "-a", "https://10.0.0.5/api/storage/volumes",
        ]).unwrap();
        assert_eq!(opts.into_config().unwrap().api_url, "https://10.0.0.5/api/storage/volumes");
    }

    #[test]
    fn unit_options_missing_are_unknown() {
        let opts = VolumeOpts {
            username: None,
            password: Some("secret".to_string()),
            warning: 10,
            critical: 0,
            svm: "vserver1".to_string(),
            hostname: None,
            api_url: None,
            http: crate::utility::HttpOpts { insecure: false, proxy: None, timeout: 30 },
        };
        let error = opts.into_config().unwrap_err();
        assert_eq!(error.status(), Status::Unknown);
        assert_eq!(error.to_string(), "Missing required arguments: username, critical, hostname or api-url");
    }

    #[test]
    fn unit_volume_count_metric() {
        let result = evaluate(&volume_count_metric(15), &Thresholds::new(10, 20), Polarity::AscendingBad);
        assert_eq!(result.status_line(), "WARNING: 15 volumes (>= 10) | volumes=15;10;20;;");
    }
}
