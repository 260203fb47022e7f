//! Session token issuance and verification
//!
//! Stateless HS256 JWTs carrying the user's id and username. There is no
//! server-side session store and no revocation; logout is client-side
//! "forget the token".

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use fitgen_types::UserId;

use crate::AccountError;

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    pub sub: String,
    /// Username at issuance time
    pub username: String,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

impl TokenClaims {
    /// Parse the subject back into a user ID
    pub fn user_id(&self) -> Result<UserId, AccountError> {
        UserId::parse(&self.sub).map_err(|_| AccountError::InvalidToken)
    }
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a token issuer from a signing secret
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for a user
    pub fn issue(&self, user_id: UserId, username: &str) -> Result<String, AccountError> {
        self.issue_at(Utc::now(), user_id, username)
    }

    /// Issue a token with an explicit issuance time (clock injection)
    pub fn issue_at(
        &self,
        now: DateTime<Utc>,
        user_id: UserId,
        username: &str,
    ) -> Result<String, AccountError> {
        let iat = now.timestamp();
        // Saturate so an absurd TTL can never wrap into the past
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = TokenClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat,
            exp: iat.saturating_add(ttl),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AccountError::Internal(format!("token signing failed: {e}")))
    }

    /// Verify a token's signature and expiry
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AccountError> {
        self.verify_at(Utc::now(), token)
    }

    /// Verify a token against an explicit clock (clock injection)
    ///
    /// Signature and claim shape are checked by the JWT library; expiry is
    /// checked against the supplied `now` so tests can time-travel.
    pub fn verify_at(&self, now: DateTime<Utc>, token: &str) -> Result<TokenClaims, AccountError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AccountError::InvalidToken)?;

        if data.claims.exp <= now.timestamp() {
            return Err(AccountError::TokenExpired);
        }

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    const SECRET: &[u8] = b"test-secret-for-token-unit-tests";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::from_secs(3600))
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let issuer = issuer();
        let token = issuer.issue(UserId(42), "alice").unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.user_id().unwrap(), UserId(42));
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();
        let issued = Utc::now();
        let token = issuer.issue_at(issued, UserId(42), "alice").unwrap();

        // Still valid just inside the window
        let almost = issued + ChronoDuration::seconds(3599);
        assert!(issuer.verify_at(almost, &token).is_ok());

        // Rejected once the hour has passed
        let later = issued + ChronoDuration::seconds(3601);
        let result = issuer.verify_at(later, &token);
        assert!(matches!(result, Err(AccountError::TokenExpired)));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let issuer = issuer();
        let token = issuer.issue(UserId(42), "alice").unwrap();

        // Flip the last byte of the signature
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let result = issuer.verify(&tampered);
        assert!(matches!(result, Err(AccountError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = issuer();
        let other = TokenIssuer::new(b"a-completely-different-secret!!!", Duration::from_secs(3600));

        let token = signer.issue(UserId(42), "alice").unwrap();
        let result = other.verify(&token);
        assert!(matches!(result, Err(AccountError::InvalidToken)));
    }

    #[test]
    fn test_oversized_ttl_saturates_instead_of_wrapping() {
        let issuer = TokenIssuer::new(SECRET, Duration::from_secs(u64::MAX));
        let token = issuer.issue(UserId(42), "alice").unwrap();

        // The expiry clamps to the far future; the token stays valid
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.exp, i64::MAX);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = issuer();
        for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d"] {
            let result = issuer.verify(garbage);
            assert!(matches!(result, Err(AccountError::InvalidToken)), "{garbage}");
        }
    }

    #[test]
    fn test_swapped_payload_rejected() {
        let issuer = issuer();
        let token_a = issuer.issue(UserId(1), "alice").unwrap();
        let token_b = issuer.issue(UserId(2), "mallory").unwrap();

        // Payload from one token with the signature of another
        let payload_b = token_b.split('.').nth(1).unwrap();
        let mut parts: Vec<&str> = token_a.split('.').collect();
        parts[1] = payload_b;
        let franken = parts.join(".");

        if franken != token_b {
            let result = issuer.verify(&franken);
            assert!(matches!(result, Err(AccountError::InvalidToken)));
        }
    }
}
