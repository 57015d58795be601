pub mod data;
pub mod yaml;
