//! Token codec implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use bb_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::access::AuthenticatedIdentity;

/// Service for signing and verifying bearer tokens
///
/// A pure function of (token, current time, secret): no server-side
/// token state is kept and no revocation exists. Verification failures
/// are deliberately uniform: signature mismatch, malformed payload,
/// and expiry all surface as [`TokenError::Invalid`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a new token service from the JWT configuration
    ///
    /// An empty signing secret is a startup failure, not a per-call
    /// error: constructing the service fails and the process should not
    /// come up.
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::KeyMisconfigured);
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Ok(Self {
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Signs a one-hour token carrying the identity email
    pub fn issue(&self, email: &str) -> Result<String, TokenError> {
        let claims = Claims::new(email);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Verifies a token and yields the authenticated identity
    ///
    /// This is the only constructor of [`AuthenticatedIdentity`]: holding
    /// one downstream proves the token was verified here.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        if token_data.claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }

        Ok(AuthenticatedIdentity::from_verified_claims(token_data.claims))
    }
}
