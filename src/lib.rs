//! JWT-authenticated task management backend.
//!
//! Members register and log in to receive a stateless, one-hour session
//! token; the token guards profile and per-user task routes.
//!
//! ## Modules
//!
//! - [`auth`] — password hashing, tokens, the [`Auth`] guard, auth handlers
//! - [`tasks`] — task model and CRUD handlers
//! - [`database`] — PostgreSQL connectivity and schema bootstrap
//! - [`Memory`] — in-process store with the same contract
//! - [`Server`] — actix-web wiring
pub mod auth;
pub mod database;
pub mod tasks;

mod config;
mod error;
mod id;
mod memory;
mod runtime;
mod server;
mod store;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use id::*;
pub use memory::*;
pub use runtime::*;
pub use server::*;
pub use store::*;
pub use tasks::*;
