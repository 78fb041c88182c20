//! Servicio JWT
//!
//! Emisión y validación de tokens de acceso HS256.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::{JwtClaims, UserInfo};

/// Configuración JWT
pub struct JwtConfig {
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        let config = JwtConfig {
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(expiration_hours),
        };

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            config,
        }
    }

    /// Duración configurada del token de acceso
    pub fn access_token_duration(&self) -> Duration {
        self.config.access_token_duration
    }

    /// Genera un token de acceso
    pub fn generate_access_token(&self, user_info: &UserInfo) -> Result<String, String> {
        let now = Utc::now();
        let exp = now + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: user_info.id.clone(),
            username: user_info.username.clone(),
            role: user_info.role.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| format!("Error generating access token: {}", e))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, String> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| format!("Invalid token: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserInfo {
        UserInfo {
            id: "staff_001".to_string(),
            username: "admin".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let service = JwtService::new("test-secret", 24);
        let token = service.generate_access_token(&test_user()).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.sub, "staff_001");
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let service = JwtService::new("test-secret", 24);
        let token = service.generate_access_token(&test_user()).unwrap();

        let other = JwtService::new("another-secret", 24);
        assert!(other.validate_token(&token).is_err());
    }
}
