use crate::domain::CompletionRecord;

pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Records strictly above `threshold`. NaN never passes.
pub fn report(records: &[CompletionRecord], threshold: f64) -> Vec<CompletionRecord> {
    records
        .iter()
        .filter(|record| record.task_completion_percentage > threshold)
        .cloned()
        .collect()
}
