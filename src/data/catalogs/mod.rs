mod entity;
mod repository;

pub use entity::*;
pub use repository::*;
