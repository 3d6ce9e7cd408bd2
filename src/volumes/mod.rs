//! Module for counting the volumes of an SVM using the storage REST API `/api/storage/volumes`.
//!
//! The endpoint returns the volumes as records:
//! ```text
//! {
//!   "records": [
//!     { "uuid": "028baa66-41bd-11e9-81d5-00a0986138f7", "name": "vol_data1", "svm": { "name": "vserver1" } },
//!     { "uuid": "0350a2f4-41bd-11e9-81d5-00a0986138f7", "name": "vol_data2", "svm": { "name": "vserver1" } }
//!   ],
//!   "num_records": 2
//! }
//! ```
//! The metric is the number of records, a higher number is worse.
//! Authentication is HTTP basic authentication.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
