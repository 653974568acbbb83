use serde::Serialize;

/// Per-user completion figure derived from the fetched tasks.
///
/// `task_completion_percentage` is NaN for a user with no tasks at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub user_id: i64,
    pub name: String,
    pub task_completion_percentage: f64,
}

impl CompletionRecord {
    pub fn new(user_id: i64, name: impl Into<String>, task_completion_percentage: f64) -> Self {
        Self {
            user_id,
            name: name.into(),
            task_completion_percentage,
        }
    }
}
