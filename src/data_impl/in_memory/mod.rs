mod catalog_repository;
mod data;
mod identity_repository;
mod tenant_repository;

pub use catalog_repository::*;
pub use data::*;
pub use identity_repository::*;
pub use tenant_repository::*;
