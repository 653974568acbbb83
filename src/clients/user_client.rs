use crate::domain::User;
use crate::resource_framework::{Resource, ResourceClient};

impl Resource for User {
    const PATH: &'static str = "users";
}

/// Client for the `/users` resource.
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, fetch_users);
