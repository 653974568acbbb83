#[macro_use]
mod macros;

pub mod user_client;
pub mod todo_client;

pub use user_client::*;
pub use todo_client::*;
