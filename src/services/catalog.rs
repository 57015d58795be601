use async_trait::async_trait;
use derive_new::new;
use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::data::{
    catalogs::CatalogRepositoryError, tenants::TenantRepositoryError,
};

/// Provisions per-tenant catalog collections and inserts product
/// records with a per-tenant uniqueness constraint on the code.
#[async_trait]
pub trait CatalogService: Send + Sync + 'static {
    async fn add_product(
        &self,
        tenant_name: &str,
        product_code: &str,
        status: i32,
    ) -> Result<(), CatalogServiceError>;
}

pub type DynCatalogService = Box<dyn CatalogService + Send + Sync>;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct CatalogServiceError(pub(crate) CatalogServiceErrorInner);

impl CatalogServiceError {
    pub fn kind(&self) -> CatalogServiceErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<CatalogServiceErrorInner>> From<T> for CatalogServiceError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self(inner)
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error, new)]
#[strum_discriminants(vis(pub), name(CatalogServiceErrorKind))]
pub enum CatalogServiceErrorInner {
    #[error("Tenant with name '{0}' does not exist")]
    TenantDoesNotExist(String),

    #[error("Product code '{0}' already exists for this tenant")]
    ProductCodeTaken(String),

    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error(transparent)]
    TenantRepository(#[from] TenantRepositoryError),

    #[error(transparent)]
    CatalogRepository(#[from] CatalogRepositoryError),
}
