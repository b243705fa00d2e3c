use crate::config::JwtConfig;
use crate::types::claims::Claims;
use chrono::{Duration, Utc};
use entity::user::Model as UserModel;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

pub fn issue_token(user: &UserModel, cfg: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        user_id: user.id,
        username: user.username.clone(),
        roles: user.roles.clone(),
        club_code: user.club_code.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(cfg.ttl_hours)).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(cfg.secret.as_bytes()))
}

/// Verifies signature and expiry.
pub fn decode_token(token: &str, cfg: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::role::{Role, Roles};
    use uuid::Uuid;

    fn cfg(ttl_hours: i64) -> JwtConfig {
        JwtConfig { secret: "unit-test-secret".into(), ttl_hours }
    }

    fn user() -> UserModel {
        let now = Utc::now();
        UserModel {
            id: Uuid::new_v4(),
            username: "carol".into(),
            email: "carol@example.com".into(),
            password_hash: "x".into(),
            roles: Roles::new([Role::Admin, Role::ClubMember]),
            club_code: "ROBOTICS".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_token_decodes_to_user_claims() {
        let u = user();
        let token = issue_token(&u, &cfg(24)).unwrap();
        let claims = decode_token(&token, &cfg(24)).unwrap();

        assert_eq!(claims.user_id, u.id);
        assert_eq!(claims.club_code, "ROBOTICS");
        assert!(claims.has_role(Role::Admin));
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(&user(), &cfg(24)).unwrap();
        let other = JwtConfig { secret: "different".into(), ttl_hours: 24 };
        assert!(decode_token(&token, &other).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s leeway.
        let token = issue_token(&user(), &cfg(-1)).unwrap();
        assert!(decode_token(&token, &cfg(-1)).is_err());
    }
}
