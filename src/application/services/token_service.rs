use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug)]
pub enum TokenError {
    InvalidToken,
    Expired,
    EncodingError(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::InvalidToken => write!(f, "Invalid token"),
            TokenError::Expired => write!(f, "Token has expired"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    iat: i64,
}

/// Issues and verifies the bearer tokens that identify a user on every
/// authenticated route.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::hours(24),
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + self.lifetime).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::InvalidToken,
            },
        )?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify() {
        let service = TokenService::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        assert_eq!(service.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::new("secret-a");
        let verifier = TokenService::new("secret-b");

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(matches!(
            verifier.verify(&token),
            Err(TokenError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new("test-secret");
        assert!(service.verify("not.a.jwt").is_err());
    }
}
