//! JWT Token Service
//!
//! 实现 TokenServicePort trait，使用 HS256 对称签名。
//! 载荷: `{id, username, iat, exp}`

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::application::ports::{TokenClaims, TokenError, TokenServicePort};
use crate::domain::user::{UserId, Username};

/// JWT 服务
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs,
        }
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}

impl TokenServicePort for JwtTokenService {
    fn issue(&self, user_id: UserId, username: &Username) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            id: user_id.value(),
            username: username.as_str().to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        self.sign(&claims)
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let service = JwtTokenService::new("secret", 60);
        let token = service.issue(UserId::new(5), &username("alice")).unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.id, 5);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 60);
        assert_eq!(claims.user_id(), UserId::new(5));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtTokenService::new("secret-a", 60);
        let verifier = JwtTokenService::new("secret-b", 60);
        let token = issuer.issue(UserId::new(1), &username("bob")).unwrap();

        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        let service = JwtTokenService::new("secret", 60);
        assert!(matches!(
            service.verify("definitely.not.a-jwt"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_expired_rejected() {
        let service = JwtTokenService::new("secret", 60);
        let now = Utc::now().timestamp();
        // 超出默认 60 秒的时钟偏差容忍
        let token = service
            .sign(&TokenClaims {
                id: 1,
                username: "carol".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Expired)));
    }
}
