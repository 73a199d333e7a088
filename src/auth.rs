use actix_web::{dev::Payload, FromRequest, HttpRequest};
use anyhow::Context;
use chrono::Utc;
use futures::future::{ready, Ready};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const TOKEN_HEADER: &str = "token";

const TOKEN_TTL_SECS: i64 = 7 * 24 * 3600;

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Unauthorized. Please try again.".to_string())
}

#[derive(Serialize, Deserialize)]
struct Claims {
    sub: u64,
    exp: usize,
}

fn jwt_secret() -> anyhow::Result<String> {
    std::env::var("JWT_SECRET").context("JWT_SECRET not found")
}

pub fn sign_token(id: u64, secret: &str) -> anyhow::Result<String> {
    let exp = (Utc::now().timestamp() + TOKEN_TTL_SECS) as usize;
    let claims = Claims { sub: id, exp };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("token signing failed")
}

pub fn verify_token(token: &str, secret: &str) -> Result<u64, ApiError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| unauthorized())?;
    Ok(data.claims.sub)
}

pub fn issue_token(id: u64) -> anyhow::Result<String> {
    sign_token(id, &jwt_secret()?)
}

/// Identity of the caller, decoded from the signed token in the `token`
/// header. Taking this as a handler parameter is the authorization gate:
/// a missing, malformed or expired token short-circuits with 401 before
/// the handler body runs.
pub struct AuthId(pub u64);

fn identity_from_request(req: &HttpRequest) -> Result<AuthId, ApiError> {
    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(unauthorized)?;
    let secret = jwt_secret().map_err(|_| unauthorized())?;
    verify_token(token, &secret).map(AuthId)
}

impl FromRequest for AuthId {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;
    type Config = ();

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identity_from_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret";

    #[test]
    fn token_round_trip() {
        let token = sign_token(42, SECRET).unwrap();
        let id = verify_token(&token, SECRET).unwrap();
        assert_eq!(id, 42);
    }

    #[test]
    fn tampered_token_rejected() {
        let token = sign_token(42, SECRET).unwrap();
        let err = verify_token(&token, "other_secret").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn expired_token_rejected() {
        let claims = Claims {
            sub: 42,
            exp: (Utc::now().timestamp() - 3600) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn garbage_token_rejected() {
        let err = verify_token("not.a.token", SECRET).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
