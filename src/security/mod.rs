pub mod impls;
mod traits;

pub use traits::*;
