pub mod catalogs;
pub mod identities;
pub mod tenants;
