//! Account credentials and bearer tokens
//!
//! Tokens name the account by username in `sub`. A [`Principal`] is what goes
//! in and what comes back out; handlers never see raw claims.

use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use connectly_core::Principal;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    iat: i64,
    token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Tokens handed out on a successful login
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthService {
    pub fn new(secret: String, access_expiration_hours: u64, refresh_expiration_days: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: Duration::hours(access_expiration_hours as i64),
            refresh_ttl: Duration::days(refresh_expiration_days as i64),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Check `password` against the account's stored hash and issue tokens.
    ///
    /// A missing account and a wrong password fail identically.
    pub fn sign_in(
        &self,
        principal: &Principal,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<TokenPair> {
        let accepted = match stored_hash {
            Some(hash) => self.verify_password(password, hash)?,
            None => false,
        };

        if !accepted {
            return Err(ServerError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(TokenPair {
            access_token: self.issue(principal, TokenType::Access)?,
            refresh_token: self.issue(principal, TokenType::Refresh)?,
        })
    }

    /// Sign a token of the given type for `principal`
    pub fn issue(&self, principal: &Principal, token_type: TokenType) -> Result<String> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let now = Utc::now();

        let claims = Claims {
            sub: principal.username().to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(ServerError::from)
    }

    /// Identify the holder of `token`, which must be signed by this service,
    /// unexpired, and of type `expected`
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Principal> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())?.claims;

        if claims.token_type != expected {
            return Err(ServerError::Unauthorized("Invalid token type".to_string()));
        }

        Ok(Principal::new(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("secret".to_string(), 24, 30)
    }

    #[test]
    fn test_issued_token_identifies_principal() {
        let auth = service();
        let alice = Principal::new("alice");

        let token = auth.issue(&alice, TokenType::Access).unwrap();
        assert_eq!(auth.verify(&token, TokenType::Access).unwrap(), alice);
    }

    #[test]
    fn test_token_type_is_enforced() {
        let auth = service();
        let alice = Principal::new("alice");

        let refresh = auth.issue(&alice, TokenType::Refresh).unwrap();
        assert!(matches!(
            auth.verify(&refresh, TokenType::Access),
            Err(ServerError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = service();
        let claims = Claims {
            sub: "alice".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
            iat: (Utc::now() - Duration::hours(3)).timestamp(),
            token_type: TokenType::Access,
        };
        let token = encode(&Header::default(), &claims, &auth.encoding_key).unwrap();

        assert!(matches!(
            auth.verify(&token, TokenType::Access),
            Err(ServerError::Jwt(_))
        ));
    }

    #[test]
    fn test_sign_in_without_account_fails_like_wrong_password() {
        let auth = service();
        let hash = auth.hash_password("right").unwrap();
        let alice = Principal::new("alice");

        let missing = auth.sign_in(&alice, "right", None).unwrap_err();
        let wrong = auth.sign_in(&alice, "wrong", Some(&hash)).unwrap_err();
        assert_eq!(missing.to_string(), wrong.to_string());

        let pair = auth.sign_in(&alice, "right", Some(&hash)).unwrap();
        assert_eq!(
            auth.verify(&pair.refresh_token, TokenType::Refresh).unwrap(),
            alice
        );
    }
}
