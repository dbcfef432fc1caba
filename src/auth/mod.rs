//! Authentication, tokens, and the route guard.
//!
//! Stateless JWT sessions with Argon2 password hashing.
//!
//! - [`Member`] — registered account
//! - [`Claims`] — JWT payload: subject, issued-at, expiry
//! - [`Crypto`] — token signing and verification
//! - [`Auth`] — extractor that guards protected handlers
//! - [`password`] — Argon2 hashing and verification
//! - [`email`] — address well-formedness
mod claims;
mod crypto;
mod dto;
mod handlers;
mod member;
mod middleware;
mod repository;
pub mod email;
pub mod password;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use handlers::*;
pub use member::*;
pub use middleware::*;
pub use repository::*;
