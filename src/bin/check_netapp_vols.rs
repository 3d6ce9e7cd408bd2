//! Check the number of volumes of an SVM.
//!
//! ```text
//! check_netapp_vols -H cluster1.example.internal -u monitor -p secret -v vserver1 -w 10 -c 20
//! WARNING: 15 volumes (>= 10) | volumes=15;10;20;;
//! ```
use dotenv::dotenv;
use log::*;
use infra_checks::status::{exit_with_error, print_and_exit};
use infra_checks::utility;
use infra_checks::volumes::{check_volumes, VolumeOpts};

fn main() {
    dotenv().ok();
    env_logger::init();

    let options: VolumeOpts = utility::parse_options();
    let config = options.into_config().unwrap_or_else(|error| exit_with_error(&error));
    info!("svm: {}, url: {}, thresholds: {:?}", config.svm, config.api_url, config.thresholds);

    let client = utility::build_client(&config.http).unwrap_or_else(|error| exit_with_error(&error));
    let result = check_volumes(&client, &config);

    print_and_exit(result.status, &result.status_line());
}
