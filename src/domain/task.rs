use serde::Deserialize;

/// A todo item from the `/todos` resource.
///
/// `user_id` is not checked against the fetched users; a task may point at a user that was never
/// returned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
impl Task {
    pub fn new(user_id: i64, id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_user_id() {
        let json = r#"{ "userId": 1, "id": 1, "title": "delectus aut autem", "completed": false }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task, Task::new(1, 1, "delectus aut autem", false));
    }
}
