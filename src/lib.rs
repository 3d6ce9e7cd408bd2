//! Monitoring plugins that follow the Nagios plugin convention.
//!
//! Every plugin performs one (or a small fixed number of) HTTP requests,
//! extracts a single metric, compares it against warning and critical
//! thresholds, prints one status line and exits with the matching code:
//!
//! | status   | exit code |
//! |----------|-----------|
//! | OK       | 0         |
//! | WARNING  | 1         |
//! | CRITICAL | 2         |
//! | UNKNOWN  | 3         |
//!
//! The plugins themselves are the binaries in `src/bin`. This library holds what they share:
//! - [status]: the plugin states and the final status line.
//! - [threshold]: evaluation of a metric against thresholds, and perfdata.
//! - [certificate]: days remaining until a base64 encoded certificate expires.
//! - [aggregate]: evaluation of an ordered list of items into one worst-case result.
//! - [volumes]: the storage API volume count check.
//! - [secrets]: the Kubernetes TLS secret expiry checks.
#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod status;
pub mod threshold;
pub mod certificate;
pub mod aggregate;
pub mod utility;
pub mod volumes;
pub mod secrets;

#[cfg(test)]
mod utility_test;
