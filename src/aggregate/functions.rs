//! The impls and functions
//!
use std::time::Instant;
use itertools::Itertools;
use log::*;
use rayon::prelude::*;
use anyhow::{Context, Result};
use crate::aggregate::{AggregateResult, ItemResult};
use crate::error::CheckError;
use crate::status::{status_line, Status};
use crate::threshold::CheckResult;

impl AggregateResult {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn push(
        &mut self,
        item: &str,
        result: CheckResult,
    )
    {
        self.status = self.status.worst(result.status);
        self.results.push(ItemResult { item: item.to_string(), result });
    }
    /// The per item messages, separated by `; `.
    pub fn message(&self) -> String {
        self.results.iter().map(|r| &r.result.message).join("; ")
    }
    /// The per item perfdata, separated by a space.
    /// Items that failed have no perfdata.
    pub fn perfdata(&self) -> String {
        self.results.iter()
            .filter_map(|r| r.result.perfdata.as_ref())
            .join(" ")
    }
    /// `<STATUS>: <message>; <message> | <perfdata> <perfdata>`
    ///
    /// Without items, the line is the status word only.
    pub fn status_line(&self) -> String {
        if self.results.is_empty() {
            return self.status.to_string();
        }
        status_line(&format!("{}: {}", self.status, self.message()), &self.perfdata())
    }
}

fn evaluate_item<F>(
    item: &str,
    fetch_and_evaluate: &F,
) -> CheckResult
where
    F: Fn(&str) -> Result<CheckResult, CheckError>,
{
    match fetch_and_evaluate(item) {
        Ok(result) => result,
        Err(error) => {
            warn!("{}: {}", item, error);
            let mut result = CheckResult::from_error(Some(item), &error);
            // unknown is for the options, an item can only fail critical.
            if result.status == Status::Unknown {
                result.status = Status::Critical;
            }
            result
        }
    }
}

/// Evaluate the items one after the other, in the order given.
pub fn aggregate<F>(
    items: &[String],
    fetch_and_evaluate: F,
) -> AggregateResult
where
    F: Fn(&str) -> Result<CheckResult, CheckError>,
{
    let mut aggregate_result = AggregateResult::new();
    for item in items {
        let result = evaluate_item(item, &fetch_and_evaluate);
        aggregate_result.push(item, result);
    }
    aggregate_result
}

/// Evaluate the items using a pool of `parallel` threads.
///
/// The results are collected in the order of the items, regardless of which item finishes first.
/// A `parallel` of 1 or less evaluates the items one after the other.
pub fn aggregate_parallel<F>(
    items: &[String],
    parallel: usize,
    fetch_and_evaluate: F,
) -> Result<AggregateResult>
where
    F: Fn(&str) -> Result<CheckResult, CheckError> + Sync,
{
    if parallel <= 1 {
        return Ok(aggregate(items, fetch_and_evaluate));
    }

    info!("begin parallel read of {} items", items.len());
    let timer = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallel)
        .build()
        .with_context(|| format!("Unable to create thread pool with {} threads", parallel))?;
    let results: Vec<CheckResult> = pool.install(|| {
        items.par_iter()
            .map(|item| evaluate_item(item, &fetch_and_evaluate))
            .collect()
    });

    info!("end parallel read {:?}", timer.elapsed());

    let mut aggregate_result = AggregateResult::new();
    for (item, result) in items.iter().zip(results) {
        aggregate_result.push(item, result);
    }
    Ok(aggregate_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::{thread, time::Duration};
    use crate::threshold::{evaluate, Metric, Polarity, Thresholds};

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn days_check(days: HashMap<&'static str, i64>) -> impl Fn(&str) -> Result<CheckResult, CheckError> + Sync {
        move |item: &str| {
            let value = *days.get(item).ok_or_else(|| CheckError::Parse("missing tls.crt".to_string()))?;
            let metric = Metric::new(item, value, format!("{} {} days", item, value));
            Ok(evaluate(&metric, &Thresholds::new(30, 7), Polarity::DescendingBad))
        }
    }

    #[test]
    fn unit_worst_status_wins() {
        let statuses = HashMap::from([("a", Status::Ok), ("b", Status::Warning), ("c", Status::Critical)]);
        let result = aggregate(&items(&["a", "b", "c"]), |item| {
            Ok(CheckResult { status: statuses[item], message: format!("{}: {}", statuses[item], item), perfdata: None })
        });
        assert_eq!(result.status, Status::Critical);
        assert_eq!(result.message(), "OK: a; WARNING: b; CRITICAL: c");
    }

    #[test]
    fn unit_all_ok_is_ok() {
        let result = aggregate(&items(&["a", "b"]), days_check(HashMap::from([("a", 90), ("b", 120)])));
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.status.exit_code(), 0);
        assert_eq!(result.status_line(), "OK: OK: a 90 days; OK: b 120 days | a=90;30;7;; b=120;30;7;;");
    }

    #[test]
    fn unit_empty_list_is_ok() {
        let result = aggregate(&[], days_check(HashMap::new()));
        assert_eq!(result.status, Status::Ok);
        assert!(result.results.is_empty());
        assert_eq!(result.status_line(), "OK");
    }

    #[test]
    fn unit_three_secrets_scenario() {
        let check = days_check(HashMap::from([("secret1", 5), ("secret2", 45), ("secret3", -2)]));
        let result = aggregate(&items(&["secret1", "secret2", "secret3"]), check);
        assert_eq!(result.status, Status::Critical);
        assert_eq!(result.status.exit_code(), 2);
        let statuses: Vec<Status> = result.results.iter().map(|r| r.result.status).collect();
        assert_eq!(statuses, vec![Status::Critical, Status::Ok, Status::Critical]);
        assert_eq!(
            result.status_line(),
            "CRITICAL: CRITICAL: secret1 5 days (<= 7); OK: secret2 45 days; CRITICAL: secret3 -2 days (<= 7) \
             | secret1=5;30;7;; secret2=45;30;7;; secret3=-2;30;7;;"
        );
    }

    #[test]
    fn unit_failed_item_does_not_stop_iteration() {
        let check = days_check(HashMap::from([("first", 60), ("last", 20)]));
        let result = aggregate(&items(&["first", "broken", "last"]), check);
        assert_eq!(result.results.len(), 3);
        assert_eq!(result.status, Status::Critical);
        assert_eq!(result.results[1].result.message, "CRITICAL: broken missing tls.crt");
        assert_eq!(result.results[2].result.status, Status::Warning);
        // the failed item has no perfdata
        assert_eq!(result.perfdata(), "first=60;30;7;; last=20;30;7;;");
    }

    #[test]
    fn unit_item_argument_error_is_critical() {
        let result = aggregate(&items(&["a"]), |_| Err(CheckError::Argument("token".to_string())));
        assert_eq!(result.status, Status::Critical);
    }

    #[test]
    fn unit_parallel_keeps_input_order() {
        // the first item takes longest, so it completes last.
        let names = items(&["slow", "medium", "fast"]);
        let result = aggregate_parallel(&names, 3, |item| {
            let delay: u64 = match item { "slow" => 200, "medium" => 100, _ => 0 };
            thread::sleep(Duration::from_millis(delay));
            let metric = Metric::new(item, delay as i64, format!("{} {} days", item, delay));
            Ok(evaluate(&metric, &Thresholds::new(30, 7), Polarity::DescendingBad))
        }).unwrap();
        let order: Vec<&str> = result.results.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(order, vec!["slow", "medium", "fast"]);
        assert_eq!(result.perfdata(), "slow=200;30;7;; medium=100;30;7;; fast=0;30;7;;");
        assert_eq!(result.status, Status::Critical);
    }

    #[test]
    fn unit_parallel_one_is_sequential() {
        let check = days_check(HashMap::from([("a", 10)]));
        let result = aggregate_parallel(&items(&["a"]), 1, check).unwrap();
        assert_eq!(result.status, Status::Warning);
    }
}
