use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use time::{Duration, OffsetDateTime};

use crate::security::{
    AccessClaims, PasswordHasher, PasswordHasherError, TokenService,
    TokenServiceError, TokenServiceErrorInner,
};

/// Work factor matching the original deployment.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

pub const DEFAULT_TOKEN_VALIDITY_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHasherError> {
        let hash = bcrypt::hash(password, self.cost)
            .map_err(eyre::Report::from)?;

        Ok(hash)
    }

    fn verify(
        &self,
        password: &str,
        hash: &str,
    ) -> Result<bool, PasswordHasherError> {
        let matches =
            bcrypt::verify(password, hash).map_err(eyre::Report::from)?;

        Ok(matches)
    }
}

/// HS256 tokens signed with a process-wide secret.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validity: Duration,
}

impl JwtTokenService {
    pub fn from_secret(secret: &str, validity_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validity: Duration::days(validity_days),
        }
    }

    pub fn issue_at_expiry(
        &self,
        identity_id: u64,
        username: &str,
        expires_at: OffsetDateTime,
    ) -> Result<String, TokenServiceError> {
        let claims = AccessClaims::new(
            identity_id,
            username.to_string(),
            expires_at.unix_timestamp(),
        );

        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(eyre::Report::from)?;

        Ok(token)
    }
}

impl TokenService for JwtTokenService {
    fn issue(
        &self,
        identity_id: u64,
        username: &str,
    ) -> Result<String, TokenServiceError> {
        self.issue_at_expiry(
            identity_id,
            username,
            OffsetDateTime::now_utc() + self.validity,
        )
    }

    fn verify(&self, token: &str) -> Result<AccessClaims, TokenServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<AccessClaims>(token, &self.decoding, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenServiceErrorInner::Expired,
                _ => TokenServiceErrorInner::new_invalid(e.to_string()),
            })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::TokenServiceErrorKind;

    // Minimum cost keeps the hashing tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_round_trips() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let hash = hasher.hash("Secret#1x").unwrap();

        assert_ne!(hash, "Secret#1x");
        assert!(hasher.verify("Secret#1x", &hash).unwrap());
        assert!(!hasher.verify("Secret#1y", &hash).unwrap());
    }

    #[test]
    fn issued_token_verifies_and_carries_claims() {
        let tokens = JwtTokenService::from_secret("test-secret", 30);

        let token = tokens.issue(7, "alice123").unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.identity_id, 7);
        assert_eq!(claims.username, "alice123");
    }

    #[test]
    fn past_dated_token_is_expired_despite_valid_signature() {
        let tokens = JwtTokenService::from_secret("test-secret", 30);

        let token = tokens
            .issue_at_expiry(
                7,
                "alice123",
                OffsetDateTime::now_utc() - Duration::hours(1),
            )
            .unwrap();

        let err = tokens.verify(&token).unwrap_err();
        assert_eq!(err.kind(), TokenServiceErrorKind::Expired);
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let tokens = JwtTokenService::from_secret("test-secret", 30);
        let other = JwtTokenService::from_secret("other-secret", 30);

        let token = other.issue(7, "alice123").unwrap();

        let err = tokens.verify(&token).unwrap_err();
        assert_eq!(err.kind(), TokenServiceErrorKind::Invalid);
    }
}
