use derive_new::new;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A stored user account with credentials and tenant affiliation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Identity {
    pub id: IdentityId,

    pub username: String,
    pub email: String,
    /// bcrypt hash, never the raw password.
    pub password_hash: String,
    pub tenant_code: String,

    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, new,
)]
#[repr(transparent)]
pub struct IdentityId(pub u64);

/// Fields of an identity before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub tenant_code: String,
    pub registered_at: OffsetDateTime,
}
