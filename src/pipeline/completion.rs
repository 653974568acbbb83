use crate::domain::{CompletionRecord, Task, User};

/// One record per user, in user order.
///
/// A user with no tasks gets `0 / 0`, i.e. NaN.
pub fn compute_completion(users: &[User], tasks: &[Task]) -> Vec<CompletionRecord> {
    users
        .iter()
        .map(|user| {
            let (total, completed) = tasks
                .iter()
                .filter(|task| task.user_id == user.id)
                .fold((0usize, 0usize), |(total, completed), task| {
                    (total + 1, completed + usize::from(task.completed))
                });

            CompletionRecord::new(user.id, user.name.clone(), percentage(completed, total))
        })
        .collect()
}

fn percentage(completed: usize, total: usize) -> f64 {
    completed as f64 / total as f64 * 100.0
}
