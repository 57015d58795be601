use async_trait::async_trait;
use derive_new::new;
use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::data::catalogs::Product;

/// Dynamic-collection capability of the document store: one catalog
/// collection per tenant, created on first use.
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    /// Create the collection if it does not exist yet. An existing
    /// collection is the expected steady state, not an error.
    async fn provision(
        &self,
        collection: &str,
    ) -> Result<(), CatalogRepositoryError>;

    async fn exists_by_code(
        &self,
        collection: &str,
        product_code: &str,
    ) -> Result<bool, CatalogRepositoryError>;

    async fn insert(
        &self,
        collection: &str,
        product: Product,
    ) -> Result<(), CatalogRepositoryError>;
}

pub type DynCatalogRepository = Box<dyn CatalogRepository + Send + Sync>;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct CatalogRepositoryError(pub(crate) CatalogRepositoryErrorInner);

impl CatalogRepositoryError {
    #[allow(unused)]
    pub fn kind(&self) -> CatalogRepositoryErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<CatalogRepositoryErrorInner>> From<T> for CatalogRepositoryError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self(inner)
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error, new)]
#[strum_discriminants(vis(pub), name(CatalogRepositoryErrorKind))]
pub enum CatalogRepositoryErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error("collection '{0}' has not been provisioned")]
    CollectionDoesNotExist(String),
}
