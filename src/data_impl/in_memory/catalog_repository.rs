use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::catalogs::{
        CatalogRepository, CatalogRepositoryError,
        CatalogRepositoryErrorInner, Product,
    },
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryCatalogRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn provision(
        &self,
        collection: &str,
    ) -> Result<(), CatalogRepositoryError> {
        self.db
            .catalogs
            .write()
            .entry(collection.to_string())
            .or_default();

        Ok(())
    }

    async fn exists_by_code(
        &self,
        collection: &str,
        product_code: &str,
    ) -> Result<bool, CatalogRepositoryError> {
        Ok(self
            .db
            .catalogs
            .read()
            .get(collection)
            .is_some_and(|products| {
                products.iter().any(|product| product.code == product_code)
            }))
    }

    async fn insert(
        &self,
        collection: &str,
        product: Product,
    ) -> Result<(), CatalogRepositoryError> {
        let mut catalogs = self.db.catalogs.write();

        let products = catalogs.get_mut(collection).ok_or_else(|| {
            CatalogRepositoryErrorInner::new_collection_does_not_exist(
                collection.to_string(),
            )
        })?;

        products.push(product);

        Ok(())
    }
}
