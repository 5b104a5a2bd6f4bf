//! Data models for the bookshelf

pub mod author;
pub mod book;
pub mod note;
pub mod user;

// Re-export commonly used types
pub use author::{Author, AuthorInput};
pub use book::{Book, BookInput};
pub use note::{Note, NoteInput};
pub use user::{AuthResponse, LoginInput, RegisterInput, User, UserClaims, UserInfo};
