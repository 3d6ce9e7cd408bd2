//! Check the expiry of the certificate in a Kubernetes TLS secret.
//!
//! ```text
//! check_tls_secret --url https://rancher.example.internal --token token-abc:xyz \
//!     --cluster local --namespace ingress --secret web-tls --warning 30 --critical 7
//! OK: Certificate 'web-tls' in namespace 'ingress' expires in 84 days | web-tls=84;30;7;;
//! ```
use chrono::Utc;
use dotenv::dotenv;
use log::*;
use infra_checks::secrets::{check_secret, SecretOpts};
use infra_checks::status::{exit_with_error, print_and_exit};
use infra_checks::utility;

fn main() {
    dotenv().ok();
    env_logger::init();

    let options: SecretOpts = utility::parse_options();
    let config = options.into_config().unwrap_or_else(|error| exit_with_error(&error));
    info!("cluster: {}, namespace: {}, secret: {:?}, thresholds: {:?}", config.cluster, config.namespace, config.secrets, config.thresholds);

    let reference_time = Utc::now();
    let client = utility::build_client(&config.http).unwrap_or_else(|error| exit_with_error(&error));
    let result = check_secret(&client, &config, reference_time);

    print_and_exit(result.status, &result.status_line());
}
