//! Request guards shared by the REST and GraphQL surfaces

pub mod auth;
pub mod ownership;

pub use auth::{authenticate, bearer_token};
pub use ownership::ensure_note_owner;
