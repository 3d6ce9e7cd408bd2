//! Module for evaluating a single metric against warning and critical thresholds.
//!
//! Two directions are supported:
//! - [Polarity::AscendingBad]: a higher value is worse, such as a number of volumes.
//! - [Polarity::DescendingBad]: a lower value is worse, such as days until a certificate expires.
//!
//! A threshold of zero means 'not set' for the option parsing of the plugins,
//! the evaluation here does not treat zero specially.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
