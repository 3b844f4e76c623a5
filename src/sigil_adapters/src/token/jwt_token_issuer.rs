use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sigil_core::{TokenIssuer, TokenIssuerError, UserId};
use uuid::Uuid;

#[derive(Clone)]
pub struct TokenConfig {
    pub secret: Secret<String>,
    pub access_ttl_in_seconds: i64,
    pub refresh_ttl_in_seconds: i64,
}

impl TokenConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,
    pub kind: TokenKind,
}

/// HS256 JWT issuer.
///
/// Every token carries a random `jti`, so two tokens minted for the same user
/// in the same second still differ.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: TokenConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Decode and verify a token of any kind.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenIssuerError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| TokenIssuerError::TokenError(e.to_string()))
    }

    fn issue(&self, user_id: &UserId, kind: TokenKind) -> Result<String, TokenIssuerError> {
        let ttl = match kind {
            TokenKind::Access => self.config.access_ttl_in_seconds,
            TokenKind::Refresh => self.config.refresh_ttl_in_seconds,
        };
        let delta = chrono::Duration::try_seconds(ttl).ok_or(
            TokenIssuerError::UnexpectedError("Failed to create token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenIssuerError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: to_usize(exp)?,
            iat: to_usize(now.timestamp())?,
            jti: Uuid::new_v4().to_string(),
            kind,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenIssuerError::TokenError(e.to_string()))
    }
}

fn to_usize(timestamp: i64) -> Result<usize, TokenIssuerError> {
    timestamp
        .try_into()
        .map_err(|_| TokenIssuerError::UnexpectedError("Failed to cast i64 to usize".to_string()))
}

#[async_trait::async_trait]
impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Generating access token", skip_all)]
    async fn generate_token(&self, user_id: &UserId) -> Result<String, TokenIssuerError> {
        self.issue(user_id, TokenKind::Access)
    }

    #[tracing::instrument(name = "Generating refresh token", skip_all)]
    async fn generate_refresh_token(&self, user_id: &UserId) -> Result<String, TokenIssuerError> {
        self.issue(user_id, TokenKind::Refresh)
    }

    #[tracing::instrument(name = "Validating access token", skip_all)]
    async fn validate_token(&self, token: &str) -> Result<bool, TokenIssuerError> {
        match self.decode_claims(token) {
            Ok(claims) => Ok(claims.kind == TokenKind::Access),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected token");
                Ok(false)
            }
        }
    }
}
