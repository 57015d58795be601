use std::sync::Arc;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::identities::{
        Identity, IdentityId, IdentityRepository, IdentityRepositoryError,
        NewIdentity,
    },
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryIdentityRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_id(
        &self,
        id: IdentityId,
    ) -> Result<Option<Identity>, IdentityRepositoryError> {
        Ok(self
            .db
            .identities
            .read()
            .iter()
            .find(|identity| identity.id == id)
            .cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Identity>, IdentityRepositoryError> {
        Ok(self
            .db
            .identities
            .read()
            .iter()
            .find(|identity| identity.username == username)
            .cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Identity>, IdentityRepositoryError> {
        Ok(self
            .db
            .identities
            .read()
            .iter()
            .find(|identity| {
                identity.username == username || identity.email == email
            })
            .cloned())
    }

    async fn insert(
        &self,
        identity: NewIdentity,
    ) -> Result<IdentityId, IdentityRepositoryError> {
        let id = IdentityId::new(
            self.db.next_identity_id.fetch_add(1, Ordering::Relaxed),
        );

        self.db.identities.write().push(Identity::new(
            id,
            identity.username,
            identity.email,
            identity.password_hash,
            identity.tenant_code,
            identity.registered_at,
        ));

        Ok(id)
    }
}
