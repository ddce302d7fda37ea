//! Token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying the username and an expiry. There is
//! no revocation: a token is valid while its signature checks out and its
//! expiry lies in the future.

use crate::{
    config::{AuthConfig, Credential},
    error::ApiError,
    models::TokenClaims,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Checks login credentials and signs new tokens
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    header: Header,
    credential: Credential,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.secret.as_bytes()),
            header: Header::new(config.algorithm),
            credential: config.credential.clone(),
            ttl: Duration::seconds(config.token_ttl_seconds),
        }
    }

    /// Issue a token for the configured user, or fail with `InvalidCredentials`
    pub fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        if !self.credential.matches(username, password) {
            return Err(ApiError::InvalidCredentials);
        }
        self.issue(username)
    }

    /// Sign a token for `username` expiring one TTL from now
    pub fn issue(&self, username: &str) -> Result<String, ApiError> {
        let claims = TokenClaims {
            username: Some(username.to_string()),
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        self.sign(&claims)
    }

    /// Sign arbitrary claims with the issuer's key
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, ApiError> {
        encode(&self.header, claims, &self.key)
            .map_err(|e| ApiError::Internal(format!("jwt encode: {e}")))
    }
}

/// Verifies signature and expiry of presented tokens
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Decode `token`, failing with `InvalidToken` on any verification error
    pub fn verify(&self, token: &str) -> Result<TokenClaims, ApiError> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                ApiError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::default()
    }

    #[test]
    fn test_login_issues_verifiable_token() {
        let issuer = TokenIssuer::new(&config());
        let verifier = TokenVerifier::new(&config());

        let before = Utc::now().timestamp();
        let token = issuer.login("testuser", "testpass").unwrap();
        let after = Utc::now().timestamp();

        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.username.as_deref(), Some("testuser"));
        assert!(claims.exp >= before + 7200 - 1);
        assert!(claims.exp <= after + 7200 + 1);
    }

    #[test]
    fn test_login_rejects_wrong_credentials() {
        let issuer = TokenIssuer::new(&config());
        assert!(matches!(
            issuer.login("testuser", "wrong"),
            Err(ApiError::InvalidCredentials)
        ));
        assert!(matches!(
            issuer.login("admin", "testpass"),
            Err(ApiError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let issuer = TokenIssuer::new(&config());
        let verifier = TokenVerifier::new(&config());

        let token = issuer
            .sign(&TokenClaims {
                username: Some("testuser".to_string()),
                exp: Utc::now().timestamp() - 5,
            })
            .unwrap();

        assert!(matches!(verifier.verify(&token), Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_foreign_secret() {
        let other = AuthConfig {
            secret: "another-secret".to_string(),
            ..config()
        };
        let token = TokenIssuer::new(&other).issue("testuser").unwrap();

        let verifier = TokenVerifier::new(&config());
        assert!(matches!(verifier.verify(&token), Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_verify_accepts_token_without_username() {
        let issuer = TokenIssuer::new(&config());
        let verifier = TokenVerifier::new(&config());

        let token = issuer
            .sign(&TokenClaims {
                username: None,
                exp: Utc::now().timestamp() + 600,
            })
            .unwrap();

        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.username, None);
    }

    #[test]
    fn test_verify_rejects_token_without_expiry() {
        let key = EncodingKey::from_secret(config().secret.as_bytes());
        let token = encode(
            &Header::default(),
            &serde_json::json!({ "username": "testuser" }),
            &key,
        )
        .unwrap();

        let verifier = TokenVerifier::new(&config());
        assert!(matches!(verifier.verify(&token), Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let verifier = TokenVerifier::new(&config());
        assert!(verifier.verify("not-a-jwt").is_err());
        assert!(verifier.verify("").is_err());
        assert!(verifier.verify("a.b.c").is_err());
    }
}
