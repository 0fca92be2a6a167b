use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};
use actix_web::cookie::{Cookie, SameSite, time::Duration as CookieDuration};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // user_id
    pub exp: i64,
    pub iat: i64,
}

/// 会话令牌服务
///
/// 会话不落库：登录后把用户ID签名写入 cookie，之后每个请求由
/// `SessionMiddleware` 校验签名与过期时间后还原出用户ID。
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: i64,
    cookie_name: String,
    secure: bool,
}

impl SessionService {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expires_in: config.expires_in,
            cookie_name: config.cookie_name.clone(),
            secure: config.secure,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn issue_token(&self, user_id: i32) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in);

        let claims = SessionClaims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AppError::JwtError)
    }

    pub fn verify_token(&self, token: &str) -> AppResult<i32> {
        let validation = Validation::new(Algorithm::HS256);
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)?;

        claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::AuthError("Invalid session subject".to_string()))
    }

    /// 登录成功后下发的会话 cookie
    pub fn session_cookie(&self, user_id: i32) -> AppResult<Cookie<'static>> {
        let token = self.issue_token(user_id)?;
        Ok(Cookie::build(self.cookie_name.clone(), token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(CookieDuration::seconds(self.expires_in))
            .finish())
    }

    /// 登出时下发的删除 cookie（无论当前是否已登录）
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, expires_in: i64) -> SessionConfig {
        SessionConfig {
            secret: secret.to_string(),
            expires_in,
            cookie_name: "sid".to_string(),
            secure: false,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let service = SessionService::new(&config("secret", 3600));
        let token = service.issue_token(42).unwrap();
        assert_eq!(service.verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = SessionService::new(&config("secret-a", 3600));
        let verifier = SessionService::new(&config("secret-b", 3600));
        let token = issuer.issue_token(1).unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // jsonwebtoken 默认有 60 秒容差
        let service = SessionService::new(&config("secret", -120));
        let token = service.issue_token(1).unwrap();
        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = SessionService::new(&config("secret", 3600));
        let mut token = service.issue_token(7).unwrap();
        token.push('x');
        assert!(service.verify_token(&token).is_err());
        assert!(service.verify_token("garbage").is_err());
    }

    #[test]
    fn test_cookies() {
        let service = SessionService::new(&config("secret", 3600));
        let cookie = service.session_cookie(3).unwrap();
        assert_eq!(cookie.name(), "sid");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(service.verify_token(cookie.value()).unwrap(), 3);

        let removal = service.removal_cookie();
        assert_eq!(removal.name(), "sid");
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(CookieDuration::ZERO));
    }
}
