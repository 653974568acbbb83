//! # Mock Framework
//!
//! Canned API payloads and a `mockito` server for testing clients and the full run without the
//! network.
//!
//! Start a server with [`mock_api`] (both resources) or [`mock_resource`] (one path), then point an
//! [`AppConfig`] at it with [`config_for`].

use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};
use crate::app_system::AppConfig;
use crate::domain::{Task, User};

/// The three users inside the FanCode region, with the extra fields the live API sends.
pub fn fancode_users_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough", "geo": { "lat": "-37.3159", "lng": "81.1496" } }
        },
        {
            "id": 5,
            "name": "Chelsey Dietrich",
            "username": "Kamren",
            "email": "Lucio_Hettinger@annie.ca",
            "address": { "city": "Roscoeview", "geo": { "lat": "-31.8129", "lng": "62.5342" } }
        },
        {
            "id": 10,
            "name": "Clementina DuBuque",
            "username": "Moriah.Stanton",
            "email": "Rey.Padberg@karina.biz",
            "address": { "city": "Lebsackbury", "geo": { "lat": "-38.2386", "lng": "57.2232" } }
        }
    ])
}

pub fn fancode_users() -> Vec<User> {
    vec![
        User::new(1, "Leanne Graham", "-37.3159", "81.1496"),
        User::new(5, "Chelsey Dietrich", "-31.8129", "62.5342"),
        User::new(10, "Clementina DuBuque", "-38.2386", "57.2232"),
    ]
}

/// Five todos each: 4/5 done for user 1, 3/5 for users 5 and 10.
pub fn fancode_todos() -> Vec<Task> {
    vec![
        Task::new(1, 1, "delectus aut autem", true),
        Task::new(1, 2, "quis ut nam facilis et officia qui", true),
        Task::new(1, 3, "fugiat veniam minus", true),
        Task::new(1, 4, "et porro tempora", true),
        Task::new(1, 5, "laboriosam mollitia et enim quasi adipisci quia provident illum", false),
        Task::new(5, 6, "task 1", true),
        Task::new(5, 7, "task 2", true),
        Task::new(5, 8, "task 3", true),
        Task::new(5, 9, "task 4", false),
        Task::new(5, 10, "task 5", false),
        Task::new(10, 11, "task 6", true),
        Task::new(10, 12, "task 7", true),
        Task::new(10, 13, "task 8", true),
        Task::new(10, 14, "task 9", false),
        Task::new(10, 15, "task 10", false),
    ]
}

pub fn fancode_todos_json() -> Value {
    let todos: Vec<Value> = fancode_todos()
        .into_iter()
        .map(|task| {
            json!({
                "userId": task.user_id,
                "id": task.id,
                "title": task.title,
                "completed": task.completed,
            })
        })
        .collect();
    Value::Array(todos)
}

/// Register a GET mock for `path` answering with `status` and a JSON `body`.
pub async fn mock_resource(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Start a server serving `/users` and `/todos` from the given payloads.
pub async fn mock_api(users: &Value, todos: &Value) -> (ServerGuard, Mock, Mock) {
    let mut server = mockito::Server::new_async().await;
    let users_mock = mock_resource(&mut server, "/users", 200, &users.to_string()).await;
    let todos_mock = mock_resource(&mut server, "/todos", 200, &todos.to_string()).await;
    (server, users_mock, todos_mock)
}

pub fn config_for(server: &ServerGuard) -> AppConfig {
    AppConfig {
        base_url: server.url(),
        ..AppConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_json_matches_records() {
        let users: Vec<User> = serde_json::from_value(fancode_users_json()).unwrap();
        let todos: Vec<Task> = serde_json::from_value(fancode_todos_json()).unwrap();
        assert_eq!(users, fancode_users());
        assert_eq!(todos, fancode_todos());
    }
}
