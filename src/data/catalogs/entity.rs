use derive_new::new;
use serde::{Deserialize, Serialize};

/// A product record inside one tenant's catalog collection.
///
/// `code` is unique within its collection only; collections are fully
/// isolated namespaces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Product {
    pub code: String,

    #[serde(default)]
    pub status: i32,
}
