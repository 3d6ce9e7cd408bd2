//! Module for evaluating an ordered list of items into a single result.
//!
//! Every item is evaluated independently. A failure to evaluate an item (the API cannot be reached,
//! the data cannot be decoded) is recorded as CRITICAL for that item, and does not stop the
//! evaluation of the remaining items.
//!
//! The overall status is the worst status of all items.
//! The messages and perfdata are joined in the order of the input items,
//! also when the items are evaluated in parallel.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
