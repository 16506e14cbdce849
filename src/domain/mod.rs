//! Core domain types for Floater

mod ari;
mod book;
mod canon;

pub use ari::Ari;
pub use book::{Book, Version};
pub use canon::{Canon, CanonError};
