use std::collections::HashMap;
use std::sync::atomic::AtomicU64;

use parking_lot::RwLock;

use crate::data::{catalogs::Product, identities::Identity, tenants::Tenant};

/// Process-wide document store. Each repository call takes its lock
/// independently; nothing spans a check and the following write, which
/// preserves the service's documented check-then-act windows.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    pub tenants: RwLock<Vec<Tenant>>,
    pub identities: RwLock<Vec<Identity>>,
    /// Per-tenant catalog collections, keyed by collection name.
    pub catalogs: RwLock<HashMap<String, Vec<Product>>>,

    pub next_identity_id: AtomicU64,
}
