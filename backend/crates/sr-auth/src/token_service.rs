use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Default credential lifetime: 1 hour. Bounds exposure of a leaked token
/// without a server-side revocation list.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Issues and verifies stateless HS256 bearer tokens.
///
/// Validity is determined purely by signature and expiry; no storage is
/// touched on either path.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl TokenService {
    /// Create a token service with a symmetric HS256 secret
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The library treats exp == now as still valid; expiry here is
        // absolute, so `verify` checks the claim itself after decoding.
        // `exp` stays in required_spec_claims, a token without it fails.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        }
    }

    /// Issue a signed token bound to `user_id`, expiring `ttl_secs` from now
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.ttl_secs as i64,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token and return the subject user id.
    ///
    /// A token whose expiry equals the current second is already expired.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        if Utc::now().timestamp() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Additional claim validation
        token_data.claims.validate()?;

        Uuid::parse_str(&token_data.claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Configured token lifetime in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}
