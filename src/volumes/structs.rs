//! The structs
//!
use clap::Parser;
use crate::threshold::Thresholds;
use crate::utility::{Authentication, HttpOpts, HttpSettings};

/// The options of `check_netapp_vols`.
///
/// Warning and critical are counts of volumes, 0 means not set.
#[derive(Debug, Clone, Parser)]
#[command(name = "check_netapp_vols", version, about = "Check the number of volumes of an SVM")]
pub struct VolumeOpts {
    /// Username for the storage REST API
    #[arg(short, long, env = "NETAPP_USERNAME")]
    pub username: Option<String>,
    /// Password for the storage REST API
    #[arg(short, long, env = "NETAPP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Warning threshold for the number of volumes
    #[arg(short, long, default_value_t = 0)]
    pub warning: i64,
    /// Critical threshold for the number of volumes
    #[arg(short, long, default_value_t = 0)]
    pub critical: i64,
    /// Name of the SVM
    #[arg(short = 'v', long, default_value = "vserver1")]
    pub svm: String,
    /// Hostname of the cluster management interface
    #[arg(short = 'H', long, env = "NETAPP_HOSTNAME")]
    pub hostname: Option<String>,
    /// Full URL of the volumes endpoint, overrides --hostname
    #[arg(short = 'a', long)]
    pub api_url: Option<String>,
    #[command(flatten)]
    pub http: HttpOpts,
}

/// The validated configuration of the volume check.
#[derive(Debug, Clone)]
pub struct VolumeCheckConfig {
    pub api_url: String,
    pub svm: String,
    pub authentication: Authentication,
    pub thresholds: Thresholds,
    pub http: HttpSettings,
}

/// The root struct for deserializing `/api/storage/volumes`.
///
/// Only the records are needed, and from a record only the properties to log it.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Volumes {
    pub records: Vec<Volume>,
    pub num_records: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Volume {
    #[serde(default)]
    pub name: String,
    pub svm: Option<SvmReference>,
}

/// The svm of a record is an object on current versions of the API.
/// A plain name is accepted as well.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SvmReference {
    Name(String),
    Object { name: String },
}
