//! Check the expiry of the certificates in a list of Kubernetes TLS secrets.
//!
//! ```text
//! check_tls_secrets --url https://rancher.example.internal --token token-abc:xyz \
//!     --cluster local --namespace ingress --secrets web-tls,api-tls --warning 30 --critical 7
//! WARNING: OK: web-tls 84 days; WARNING: api-tls 12 days (<= 30) | web-tls=84;30;7;; api-tls=12;30;7;;
//! ```
use chrono::Utc;
use dotenv::dotenv;
use log::*;
use infra_checks::secrets::{check_secrets, SecretsOpts};
use infra_checks::status::{exit_with_error, print_and_exit, Status};
use infra_checks::utility;

fn main() {
    dotenv().ok();
    env_logger::init();

    let options: SecretsOpts = utility::parse_options();
    let config = options.into_config().unwrap_or_else(|error| exit_with_error(&error));
    info!("cluster: {}, namespace: {}, secrets: {:?}, thresholds: {:?}", config.cluster, config.namespace, config.secrets, config.thresholds);

    let reference_time = Utc::now();
    let client = utility::build_client(&config.http).unwrap_or_else(|error| exit_with_error(&error));
    let result = match check_secrets(&client, &config, reference_time) {
        Ok(result) => result,
        Err(error) => print_and_exit(Status::Unknown, &format!("UNKNOWN: {:#}", error)),
    };

    print_and_exit(result.status, &result.status_line());
}
