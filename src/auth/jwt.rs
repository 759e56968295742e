use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::{Claims, Role};
use crate::error::AppError;

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

pub fn now_unix() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as usize)
        .unwrap_or_default()
}

pub fn encode_token(keys: &JwtKeys, claims: &Claims) -> Result<String, AppError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".into());

    encode(&header, claims, &keys.enc)
        .map_err(|err| AppError::internal(format!("Token encoding failed: {err}")))
}

pub fn decode_token(keys: &JwtKeys, token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    decode::<Claims>(token, &keys.dec, &validation)
        .map(|data| data.claims)
        .map_err(|err| AppError::unauthorized(format!("Invalid or expired token: {err}")))
}

pub fn make_access_claims(user_id: &uuid::Uuid, roles: Vec<Role>, ttl_secs: usize) -> Claims {
    let iat = now_unix();
    Claims {
        sub: user_id.to_string(),
        roles,
        iat,
        exp: iat + ttl_secs,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{JwtKeys, Role, decode_token, encode_token, make_access_claims};
    use crate::error::AppError;

    #[test]
    fn makes_claims_with_expected_subject_roles_and_ttl() {
        let user_id = Uuid::new_v4();
        let claims = make_access_claims(&user_id, vec![Role::Cliente], 60);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.roles, vec![Role::Cliente]);
        assert_eq!(claims.exp.saturating_sub(claims.iat), 60);
    }

    #[test]
    fn token_decodes_with_same_secret_only() {
        let keys = JwtKeys::from_secret(b"unit-test-secret");
        let claims = make_access_claims(&Uuid::new_v4(), vec![Role::Admin], 600);
        let token = encode_token(&keys, &claims).expect("token should encode");

        let decoded = decode_token(&keys, &token).expect("token should decode");
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.roles, claims.roles);

        let err = decode_token(&JwtKeys::from_secret(b"other-secret"), &token)
            .expect_err("foreign secret should fail");
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        let err = decode_token(&JwtKeys::from_secret(b"unit-test-secret"), "not-a-token")
            .expect_err("decode should fail");

        assert!(
            err.message().starts_with("Invalid or expired token:"),
            "unexpected message: {}",
            err.message()
        );
    }
}
