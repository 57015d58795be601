use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::{
        catalogs::{DynCatalogRepository, Product},
        tenants::DynTenantRepository,
    },
    services::{
        CatalogService, CatalogServiceError, CatalogServiceErrorInner,
    },
};

#[derive(new)]
pub struct DefaultCatalogService {
    tenant_repository: DynTenantRepository,
    catalog_repository: DynCatalogRepository,
}

#[async_trait]
impl CatalogService for DefaultCatalogService {
    async fn add_product(
        &self,
        tenant_name: &str,
        product_code: &str,
        status: i32,
    ) -> Result<(), CatalogServiceError> {
        let Some(tenant) =
            self.tenant_repository.find_by_name(tenant_name).await?
        else {
            return Err(
                CatalogServiceErrorInner::new_tenant_does_not_exist(
                    tenant_name.to_string(),
                )
                .into(),
            );
        };

        // Collections are keyed by the tenant's stored code, not a
        // transform of its display name.
        let collection = tenant.code;

        self.catalog_repository.provision(&collection).await?;

        if self
            .catalog_repository
            .exists_by_code(&collection, product_code)
            .await?
        {
            return Err(CatalogServiceErrorInner::new_product_code_taken(
                product_code.to_string(),
            )
            .into());
        }

        self.catalog_repository
            .insert(&collection, Product::new(product_code.to_string(), status))
            .await?;

        tracing::info!(%collection, product_code, "added product");

        Ok(())
    }
}
