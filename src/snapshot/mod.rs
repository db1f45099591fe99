//! Durable interview snapshots
//!
//! A finished session is persisted as one immutable JSON record per
//! uuid-keyed file. Records outlive the session that produced them and are
//! listed/retrieved independently of any live conversation state.

mod record;
mod store;

pub use record::InterviewSnapshot;
pub use store::{SnapshotScan, SnapshotStore};
