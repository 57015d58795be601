use async_trait::async_trait;
use derive_new::new;
use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::{
    data::{
        identities::{IdentityId, IdentityRepositoryError},
        tenants::{TenantKind, TenantRepositoryError},
    },
    security::{PasswordHasherError, TokenServiceError},
};

/// Orchestrates registration and login: format validation, uniqueness
/// pre-checks, tenant-code verification, password hashing and token
/// issuance.
#[async_trait]
pub trait IdentityService: Send + Sync + 'static {
    async fn register(
        &self,
        registration: Registration,
    ) -> Result<IdentityId, IdentityServiceError>;

    async fn login(
        &self,
        credentials: Credentials,
    ) -> Result<String, IdentityServiceError>;
}

pub type DynIdentityService = Box<dyn IdentityService + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub tenant_code: String,
    /// Which directory the affiliation code must resolve in.
    pub kind: TenantKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub tenant_code: String,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct IdentityServiceError(pub(crate) IdentityServiceErrorInner);

impl IdentityServiceError {
    pub fn kind(&self) -> IdentityServiceErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<IdentityServiceErrorInner>> From<T> for IdentityServiceError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self(inner)
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error, new)]
#[strum_discriminants(vis(pub), name(IdentityServiceErrorKind))]
pub enum IdentityServiceErrorInner {
    #[error(
        "Username must contain at least one letter and one number, and be at least 6 characters long"
    )]
    UsernameFormat,

    #[error(
        "Password must contain at least one lowercase letter, one uppercase letter, one digit, one special character, and be at least 8 characters long"
    )]
    PasswordFormat,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Email is already taken")]
    EmailTaken,

    #[error("Invalid {0} code")]
    InvalidTenantCode(TenantKind),

    // One generic message for every failing factor so a caller cannot
    // probe which of the three was wrong.
    #[error("Username/password/companycode combination is wrong")]
    InvalidCredentials,

    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error(transparent)]
    IdentityRepository(#[from] IdentityRepositoryError),

    #[error(transparent)]
    TenantRepository(#[from] TenantRepositoryError),

    #[error(transparent)]
    PasswordHasher(#[from] PasswordHasherError),

    #[error(transparent)]
    TokenService(#[from] TokenServiceError),
}
