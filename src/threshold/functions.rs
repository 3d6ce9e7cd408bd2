//! The impls and functions
//!
use std::fmt;
use log::*;
use crate::error::CheckError;
use crate::status::Status;
use crate::threshold::{CheckResult, Metric, Perfdata, Polarity, Thresholds};

impl Polarity {
    /// The comparison operator shown next to the threshold that was crossed.
    pub fn operator(self) -> &'static str {
        match self {
            Polarity::AscendingBad => ">=",
            Polarity::DescendingBad => "<=",
        }
    }
    fn crosses(
        self,
        value: i64,
        threshold: i64,
    ) -> bool
    {
        match self {
            Polarity::AscendingBad => value >= threshold,
            Polarity::DescendingBad => value <= threshold,
        }
    }
}

impl Thresholds {
    pub fn new(warning: i64, critical: i64) -> Self {
        Thresholds { warning, critical }
    }
    /// Build thresholds from the command line values.
    ///
    /// Zero is the value of an option that was not given, and is rejected.
    /// Thresholds ordered against the polarity are accepted, but a warning is logged:
    /// with them, the warning state can never be reached.
    pub fn from_options(
        warning: i64,
        critical: i64,
        polarity: Polarity,
    ) -> Result<Thresholds, CheckError>
    {
        let missing: Vec<&str> = [("warning", warning), ("critical", critical)]
            .iter()
            .filter(|(_, value)| *value == 0)
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(CheckError::Argument(missing.join(", ")));
        }
        if polarity.crosses(warning, critical) && warning != critical {
            warn!("warning threshold {} is beyond critical threshold {} for {:?}, the warning state is unreachable", warning, critical, polarity);
        }
        Ok(Thresholds { warning, critical })
    }
    /// The status of a value, and the threshold that triggered it (if any).
    pub fn status_of(
        &self,
        value: i64,
        polarity: Polarity,
    ) -> (Status, Option<i64>)
    {
        if polarity.crosses(value, self.critical) {
            (Status::Critical, Some(self.critical))
        } else if polarity.crosses(value, self.warning) {
            (Status::Warning, Some(self.warning))
        } else {
            (Status::Ok, None)
        }
    }
}

/// Evaluate a metric against thresholds.
///
/// The message reads `<STATUS>: <description>`, followed by ` (<op> <threshold>)`
/// when a threshold was crossed, for example `WARNING: 15 volumes (>= 10)`.
pub fn evaluate(
    metric: &Metric,
    thresholds: &Thresholds,
    polarity: Polarity,
) -> CheckResult
{
    let (status, triggered_by) = thresholds.status_of(metric.value, polarity);
    debug!("{}: value {} warning {} critical {} {:?} -> {}", metric.label, metric.value, thresholds.warning, thresholds.critical, polarity, status);

    let message = match triggered_by {
        Some(threshold) => format!("{}: {} ({} {})", status, metric.description, polarity.operator(), threshold),
        None => format!("{}: {}", status, metric.description),
    };
    CheckResult {
        status,
        message,
        perfdata: Some(Perfdata {
            label: metric.label.clone(),
            value: metric.value,
            warning: thresholds.warning,
            critical: thresholds.critical,
        }),
    }
}

impl Metric {
    pub fn new(
        label: impl Into<String>,
        value: i64,
        description: impl Into<String>,
    ) -> Self
    {
        Metric { label: label.into(), value, description: description.into() }
    }
}

impl CheckResult {
    /// A CRITICAL (or UNKNOWN for argument errors) result for something that could not be measured.
    ///
    /// The subject is the item identifier in a multi item check, and none for a single check.
    pub fn from_error(
        subject: Option<&str>,
        error: &CheckError,
    ) -> Self
    {
        let status = error.status();
        let message = match subject {
            Some(subject) => format!("{}: {} {}", status, subject, error),
            None => format!("{}: {}", status, error),
        };
        CheckResult { status, message, perfdata: None }
    }
    pub fn perfdata_string(&self) -> String {
        self.perfdata.as_ref().map(|p| p.to_string()).unwrap_or_default()
    }
    /// The status line for a check that consists of this result only.
    pub fn status_line(&self) -> String {
        crate::status::status_line(&self.message, &self.perfdata_string())
    }
}

impl fmt::Display for Perfdata {
    /// The min and max fields are left empty, but kept for the consumers that split on `;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={};{};{};;", quote_label(&self.label), self.value, self.warning, self.critical)
    }
}

// labels with spaces, '=' or quotes must be single quoted, quotes inside doubled.
fn quote_label(label: &str) -> String {
    if label.contains(|c: char| c.is_whitespace() || c == '=' || c == '\'') {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}
