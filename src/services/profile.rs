use async_trait::async_trait;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, IntoDiscriminant};
use utoipa::ToSchema;

use crate::data::{
    identities::{IdentityId, IdentityRepositoryError},
    tenants::TenantRepositoryError,
};

/// Joins an authenticated identity with its tenant record.
#[async_trait]
pub trait ProfileService: Send + Sync + 'static {
    async fn get_profile(
        &self,
        identity_id: IdentityId,
    ) -> Result<Profile, ProfileServiceError>;
}

pub type DynProfileService = Box<dyn ProfileService + Send + Sync>;

#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub identity_id: u64,
    pub username: String,
    pub email: String,
    pub tenant_code: String,
    pub tenant_name: String,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ProfileServiceError(pub(crate) ProfileServiceErrorInner);

impl ProfileServiceError {
    pub fn kind(&self) -> ProfileServiceErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<ProfileServiceErrorInner>> From<T> for ProfileServiceError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self(inner)
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error, new)]
#[strum_discriminants(vis(pub), name(ProfileServiceErrorKind))]
pub enum ProfileServiceErrorInner {
    #[error("User not found")]
    IdentityDoesNotExist,

    // Reachable when a tenant is removed after registration; no
    // referential integrity ties identities to tenants.
    #[error("Tenant not found")]
    TenantDoesNotExist,

    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error(transparent)]
    IdentityRepository(#[from] IdentityRepositoryError),

    #[error(transparent)]
    TenantRepository(#[from] TenantRepositoryError),
}
