use async_trait::async_trait;
use derive_new::new;
use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::data::identities::{Identity, IdentityId, NewIdentity};

#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    async fn find_by_id(
        &self,
        id: IdentityId,
    ) -> Result<Option<Identity>, IdentityRepositoryError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Identity>, IdentityRepositoryError>;

    /// First identity matching either field. Used by the registration
    /// uniqueness pre-check; not atomic with the following insert.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Identity>, IdentityRepositoryError>;

    async fn insert(
        &self,
        identity: NewIdentity,
    ) -> Result<IdentityId, IdentityRepositoryError>;
}

pub type DynIdentityRepository = Box<dyn IdentityRepository + Send + Sync>;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct IdentityRepositoryError(pub(crate) IdentityRepositoryErrorInner);

impl IdentityRepositoryError {
    #[allow(unused)]
    pub fn kind(&self) -> IdentityRepositoryErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<IdentityRepositoryErrorInner>> From<T>
    for IdentityRepositoryError
{
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self(inner)
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error, new)]
#[strum_discriminants(vis(pub), name(IdentityRepositoryErrorKind))]
pub enum IdentityRepositoryErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),
}
