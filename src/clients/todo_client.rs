use crate::domain::Task;
use crate::resource_framework::{Resource, ResourceClient};

impl Resource for Task {
    const PATH: &'static str = "todos";
}

/// Client for the `/todos` resource.
pub struct TodoClient {
    inner: ResourceClient<Task>,
}

impl_basic_client!(TodoClient, Task, fetch_todos);
