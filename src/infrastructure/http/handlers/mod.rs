//! HTTP Handlers

mod auth;
mod index;
mod kitten;

pub use auth::*;
pub use index::*;
pub use kitten::*;
