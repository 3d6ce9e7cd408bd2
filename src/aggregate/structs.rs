//! The structs
//!
use crate::status::Status;
use crate::threshold::CheckResult;

/// The result of one item, together with its identifier.
#[derive(Debug, Clone)]
pub struct ItemResult {
    pub item: String,
    pub result: CheckResult,
}

/// This struct is a wrapper for the per item results.
///
/// The status is the worst status seen so far.
#[derive(Debug, Default)]
pub struct AggregateResult {
    pub status: Status,
    pub results: Vec<ItemResult>,
}
