use std::sync::Arc;

use derive_new::new;

use crate::{
    config::SecurityConfiguration,
    data::{
        catalogs::DynCatalogRepository, identities::DynIdentityRepository,
        tenants::DynTenantRepository,
    },
    data_impl::in_memory::{
        InMemoryCatalogRepository, InMemoryDatabase,
        InMemoryIdentityRepository, InMemoryTenantRepository,
    },
    providers::DependencyProvider,
    security::{
        DynPasswordHasher, DynTokenService,
        impls::{BcryptPasswordHasher, JwtTokenService},
    },
    services::{
        DefaultCatalogService, DefaultIdentityService, DefaultProfileService,
        DynCatalogService, DynIdentityService, DynProfileService,
    },
};

#[derive(Clone, new)]
pub struct InMemoryDependencyProvider {
    data: Arc<InMemoryDatabase>,
    security: SecurityConfiguration,
}

impl DependencyProvider for InMemoryDependencyProvider {
    fn identity_repository(&self) -> DynIdentityRepository {
        Box::new(InMemoryIdentityRepository::new(self.data.clone()))
    }

    fn tenant_repository(&self) -> DynTenantRepository {
        Box::new(InMemoryTenantRepository::new(self.data.clone()))
    }

    fn catalog_repository(&self) -> DynCatalogRepository {
        Box::new(InMemoryCatalogRepository::new(self.data.clone()))
    }

    fn password_hasher(&self) -> DynPasswordHasher {
        Box::new(BcryptPasswordHasher::new(self.security.bcrypt_cost()))
    }

    fn token_service(&self) -> DynTokenService {
        Box::new(JwtTokenService::from_secret(
            &self.security.jwt_secret,
            self.security.token_validity_days(),
        ))
    }

    fn identity_service(&self) -> DynIdentityService {
        Box::new(DefaultIdentityService::new(
            self.identity_repository(),
            self.tenant_repository(),
            self.password_hasher(),
            self.token_service(),
        ))
    }

    fn profile_service(&self) -> DynProfileService {
        Box::new(DefaultProfileService::new(
            self.identity_repository(),
            self.tenant_repository(),
        ))
    }

    fn catalog_service(&self) -> DynCatalogService {
        Box::new(DefaultCatalogService::new(
            self.tenant_repository(),
            self.catalog_repository(),
        ))
    }
}
