use crate::{
    data::{
        catalogs::DynCatalogRepository, identities::DynIdentityRepository,
        tenants::DynTenantRepository,
    },
    security::{DynPasswordHasher, DynTokenService},
    services::{DynCatalogService, DynIdentityService, DynProfileService},
};

pub trait DependencyProvider: Send + Sync + 'static {
    fn identity_repository(&self) -> DynIdentityRepository;
    fn tenant_repository(&self) -> DynTenantRepository;
    fn catalog_repository(&self) -> DynCatalogRepository;
    fn password_hasher(&self) -> DynPasswordHasher;
    fn token_service(&self) -> DynTokenService;
    fn identity_service(&self) -> DynIdentityService;
    fn profile_service(&self) -> DynProfileService;
    fn catalog_service(&self) -> DynCatalogService;
}
