//! The structs
//!
use crate::status::Status;

/// The direction in which the metric gets worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// CRITICAL if metric >= critical, WARNING if metric >= warning.
    AscendingBad,
    /// CRITICAL if metric <= critical, WARNING if metric <= warning.
    DescendingBad,
}

/// The warning and critical bounds, as supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thresholds {
    pub warning: i64,
    pub critical: i64,
}

/// A measured value, with the text needed to report it.
///
/// ```text
/// label:       "volumes"
/// value:       15
/// description: "15 volumes"
/// ```
#[derive(Debug, Clone)]
pub struct Metric {
    /// perfdata label
    pub label: String,
    pub value: i64,
    /// human readable subject and value, without status word or threshold.
    pub description: String,
}

/// A perfdata fragment: `label=value;warning;critical;;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perfdata {
    pub label: String,
    pub value: i64,
    pub warning: i64,
    pub critical: i64,
}

/// The outcome of evaluating one metric, or of a failure to obtain it.
///
/// The message starts with the status word.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
    pub perfdata: Option<Perfdata>,
}
