//! Query Handlers 实现

mod kitten_handlers;

pub use kitten_handlers::*;
