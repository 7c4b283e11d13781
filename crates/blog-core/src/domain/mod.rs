//! Domain entities.

mod post;

pub use post::{Author, BlogPost};
