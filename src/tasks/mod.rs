//! Per-user task CRUD behind the [`Auth`](crate::Auth) guard.
mod dto;
mod handlers;
mod repository;
mod status;
mod task;

pub use dto::*;
pub use handlers::*;
pub use repository::*;
pub use status::*;
pub use task::*;
