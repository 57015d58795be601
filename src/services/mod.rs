mod catalog;
mod catalog_impl;
mod identity;
mod identity_impl;
mod profile;
mod profile_impl;

pub use catalog::*;
pub use catalog_impl::*;
pub use identity::*;
pub use identity_impl::*;
pub use profile::*;
pub use profile_impl::*;
