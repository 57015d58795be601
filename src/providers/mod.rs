mod in_memory_impl;
mod traits;

pub use in_memory_impl::*;
pub use traits::*;
