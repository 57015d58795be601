use async_trait::async_trait;
use derive_new::new;
use time::OffsetDateTime;

use crate::{
    data::{
        identities::{DynIdentityRepository, IdentityId, NewIdentity},
        tenants::DynTenantRepository,
    },
    security::{DynPasswordHasher, DynTokenService},
    services::{
        Credentials, IdentityService, IdentityServiceError,
        IdentityServiceErrorInner, Registration,
    },
};

/// The fixed symbol set the password rule accepts.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+";

pub(crate) fn username_is_valid(username: &str) -> bool {
    username.chars().count() >= 6
        && username.chars().all(|c| c.is_ascii_alphanumeric())
        && username.chars().any(|c| c.is_ascii_alphabetic())
        && username.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn password_is_valid(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

#[derive(new)]
pub struct DefaultIdentityService {
    identity_repository: DynIdentityRepository,
    tenant_repository: DynTenantRepository,
    password_hasher: DynPasswordHasher,
    token_service: DynTokenService,
}

#[async_trait]
impl IdentityService for DefaultIdentityService {
    async fn register(
        &self,
        registration: Registration,
    ) -> Result<IdentityId, IdentityServiceError> {
        if !username_is_valid(&registration.username) {
            return Err(IdentityServiceErrorInner::UsernameFormat.into());
        }

        if !password_is_valid(&registration.password) {
            return Err(IdentityServiceErrorInner::PasswordFormat.into());
        }

        // Pre-check, not atomic with the insert below. A concurrent
        // duplicate registration can race past it.
        if let Some(existing) = self
            .identity_repository
            .find_by_username_or_email(
                &registration.username,
                &registration.email,
            )
            .await?
        {
            if existing.username == registration.username {
                return Err(IdentityServiceErrorInner::UsernameTaken.into());
            }
            return Err(IdentityServiceErrorInner::EmailTaken.into());
        }

        let tenant = self
            .tenant_repository
            .find_by_code(&registration.tenant_code)
            .await?;

        match tenant {
            Some(tenant) if tenant.kind == registration.kind => {}
            _ => {
                return Err(
                    IdentityServiceErrorInner::new_invalid_tenant_code(
                        registration.kind,
                    )
                    .into(),
                );
            }
        }

        let password_hash = self.password_hasher.hash(&registration.password)?;

        let id = self
            .identity_repository
            .insert(NewIdentity::new(
                registration.username,
                registration.email,
                password_hash,
                registration.tenant_code,
                OffsetDateTime::now_utc(),
            ))
            .await?;

        tracing::info!(identity_id = id.0, "registered new identity");

        Ok(id)
    }

    async fn login(
        &self,
        credentials: Credentials,
    ) -> Result<String, IdentityServiceError> {
        let Some(identity) = self
            .identity_repository
            .find_by_username(&credentials.username)
            .await?
        else {
            return Err(IdentityServiceErrorInner::InvalidCredentials.into());
        };

        if identity.tenant_code != credentials.tenant_code {
            return Err(IdentityServiceErrorInner::InvalidCredentials.into());
        }

        if !self
            .password_hasher
            .verify(&credentials.password, &identity.password_hash)?
        {
            return Err(IdentityServiceErrorInner::InvalidCredentials.into());
        }

        let token = self
            .token_service
            .issue(identity.id.0, &identity.username)?;

        tracing::info!(identity_id = identity.id.0, "issued login token");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_needs_letter_digit_and_length() {
        assert!(username_is_valid("alice1"));
        assert!(username_is_valid("1234a5"));

        // too short
        assert!(!username_is_valid("abc12"));
        // no digit
        assert!(!username_is_valid("abcdef"));
        // no letter
        assert!(!username_is_valid("123456"));
        // non-alphanumeric character
        assert!(!username_is_valid("alice_1"));
        assert!(!username_is_valid(""));
    }

    #[test]
    fn password_needs_all_four_classes_and_length() {
        assert!(password_is_valid("Abcdef1!"));
        assert!(password_is_valid("xY9_longer"));

        // too short
        assert!(!password_is_valid("Ab1!xyz"));
        // no uppercase
        assert!(!password_is_valid("abcdef1!"));
        // no lowercase
        assert!(!password_is_valid("ABCDEF1!"));
        // no digit
        assert!(!password_is_valid("Abcdefg!"));
        // symbol outside the fixed set
        assert!(!password_is_valid("Abcdef1?"));
    }
}
