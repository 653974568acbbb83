pub mod user;
pub mod task;
pub mod completion;
pub mod geo;

pub use user::*;
pub use task::*;
pub use completion::*;
pub use geo::*;
