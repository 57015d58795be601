pub mod auth;
pub mod common;
pub mod open_api;
pub mod products;
pub mod root;
