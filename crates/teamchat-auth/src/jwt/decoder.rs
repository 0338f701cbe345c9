//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use teamchat_core::config::AuthConfig;
use teamchat_core::error::AppError;

use super::claims::Claims;

/// Validates HS256 access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.jwt_leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use teamchat_core::error::ErrorKind;

    use super::*;
    use crate::jwt::encoder::JwtEncoder;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_roundtrip_yields_subject() {
        let cfg = config("test-secret");
        let user_id = Uuid::new_v4();
        let (token, _) = JwtEncoder::new(&cfg)
            .generate_access_token(user_id)
            .expect("encode");

        let claims = JwtDecoder::new(&cfg)
            .decode_access_token(&token)
            .expect("decode");
        assert_eq!(claims.user_id(), user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let (token, _) = JwtEncoder::new(&config("secret-a"))
            .generate_access_token(Uuid::new_v4())
            .expect("encode");

        let err = JwtDecoder::new(&config("secret-b"))
            .decode_access_token(&token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let cfg = config("test-secret");
        let issued = Utc::now().timestamp() - 3600;
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: issued,
            exp: issued + 60,
            jti: Uuid::new_v4(),
        };
        let token = JwtEncoder::new(&cfg).encode_claims(&claims).expect("encode");

        let err = JwtDecoder::new(&cfg).decode_access_token(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, "Token has expired");
    }
}
