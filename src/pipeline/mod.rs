//! The report pipeline: region filter, completion aggregation, threshold cut.
//!
//! Everything here is a pure function over already-fetched data, so running it twice on the same
//! snapshot gives the same answer.

pub mod geo_filter;
pub mod completion;
pub mod threshold;

pub use geo_filter::*;
pub use completion::*;
pub use threshold::*;

use tracing::info;
use crate::domain::{Bounds, CompletionRecord, Task, User};

/// Runs all three stages in order.
pub fn generate_report(users: &[User], tasks: &[Task], bounds: &Bounds, threshold: f64) -> Vec<CompletionRecord> {
    let selected = select_by_region(users, bounds);
    info!(selected = selected.len(), "Users inside region");

    let records = compute_completion(&selected, tasks);
    let reported = report(&records, threshold);
    info!(reported = reported.len(), threshold, "Users above completion threshold");

    reported
}

/// Human-readable stdout rendering, using the API's field names.
pub fn render_report(records: &[CompletionRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
