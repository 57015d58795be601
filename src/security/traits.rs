use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, IntoDiscriminant};

/// One-way salted hash and verify primitive for stored credentials.
pub trait PasswordHasher: Send + Sync + 'static {
    fn hash(&self, password: &str) -> Result<String, PasswordHasherError>;

    /// Constant-time comparison of a candidate password against a
    /// stored hash.
    fn verify(
        &self,
        password: &str,
        hash: &str,
    ) -> Result<bool, PasswordHasherError>;
}

pub type DynPasswordHasher = Box<dyn PasswordHasher + Send + Sync>;

/// Signs and verifies the time-limited bearer tokens minted at login.
pub trait TokenService: Send + Sync + 'static {
    fn issue(
        &self,
        identity_id: u64,
        username: &str,
    ) -> Result<String, TokenServiceError>;

    fn verify(&self, token: &str) -> Result<AccessClaims, TokenServiceError>;
}

pub type DynTokenService = Box<dyn TokenService + Send + Sync>;

/// Claims carried by an issued token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct AccessClaims {
    pub identity_id: u64,
    pub username: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PasswordHasherError(pub(crate) PasswordHasherErrorInner);

impl PasswordHasherError {
    #[allow(unused)]
    pub fn kind(&self) -> PasswordHasherErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<PasswordHasherErrorInner>> From<T> for PasswordHasherError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self(inner)
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error, new)]
#[strum_discriminants(vis(pub), name(PasswordHasherErrorKind))]
pub enum PasswordHasherErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TokenServiceError(pub(crate) TokenServiceErrorInner);

impl TokenServiceError {
    pub fn kind(&self) -> TokenServiceErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<TokenServiceErrorInner>> From<T> for TokenServiceError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self(inner)
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error, new)]
#[strum_discriminants(vis(pub), name(TokenServiceErrorKind))]
pub enum TokenServiceErrorInner {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid: {0}")]
    Invalid(String),

    #[error(transparent)]
    Custom(#[from] eyre::Report),
}
