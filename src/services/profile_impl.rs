use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::{
        identities::{DynIdentityRepository, IdentityId},
        tenants::DynTenantRepository,
    },
    services::{
        Profile, ProfileService, ProfileServiceError,
        ProfileServiceErrorInner,
    },
};

#[derive(new)]
pub struct DefaultProfileService {
    identity_repository: DynIdentityRepository,
    tenant_repository: DynTenantRepository,
}

#[async_trait]
impl ProfileService for DefaultProfileService {
    async fn get_profile(
        &self,
        identity_id: IdentityId,
    ) -> Result<Profile, ProfileServiceError> {
        let Some(identity) =
            self.identity_repository.find_by_id(identity_id).await?
        else {
            return Err(
                ProfileServiceErrorInner::IdentityDoesNotExist.into()
            );
        };

        let Some(tenant) = self
            .tenant_repository
            .find_by_code(&identity.tenant_code)
            .await?
        else {
            return Err(ProfileServiceErrorInner::TenantDoesNotExist.into());
        };

        Ok(Profile::new(
            identity.id.0,
            identity.username,
            identity.email,
            identity.tenant_code,
            tenant.name,
        ))
    }
}
