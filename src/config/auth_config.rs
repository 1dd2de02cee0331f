//! # Authentication Configuration Module
//!
//! OAuth 프로바이더(Google, Facebook) 클라이언트 정보와 인증 공급자 구분을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"          # 또는 CLIENT_ID
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"  # 또는 CLIENT_SECRET
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/secrets"
//! ```
//!
//! ### Facebook OAuth 설정
//! ```bash
//! export FACEBOOK_APP_ID="your-facebook-app-id"
//! export FACEBOOK_APP_SECRET="your-facebook-app-secret"
//! export FACEBOOK_REDIRECT_URI="http://localhost:3000/auth/facebook/secrets"
//! ```
//!
//! ### OAuth 보안 설정
//! ```bash
//! export OAUTH_STATE_TTL_MINUTES="10"
//! ```
//!
//! 클라이언트 ID/시크릿이 없어도 서버는 시작됩니다. 해당 프로바이더의
//! 라우트가 호출될 때 설정 오류로 응답합니다.

use std::env;

/// OAuth 2.0 Authorization Code 플로우에 필요한 클라이언트 정보
///
/// 프로바이더별 설정 구조체가 환경 변수에서 읽어 채웁니다.
/// 테스트에서는 엔드포인트를 목 서버 주소로 바꿔 직접 생성합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthClientSettings {
    pub client_id: String,
    pub client_secret: String,
    /// 인증 완료 후 프로바이더가 돌려보낼 콜백 URL
    pub redirect_uri: String,
    /// 사용자를 보낼 인증 페이지
    pub auth_uri: String,
    /// Authorization Code를 액세스 토큰으로 교환하는 엔드포인트
    pub token_uri: String,
    /// 액세스 토큰으로 프로필을 조회하는 엔드포인트
    pub profile_uri: String,
    /// 요청할 권한 범위 (공백 구분)
    pub scope: Option<String>,
}

/// 첫 번째로 설정된 환경 변수 값을 반환합니다.
fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

/// Google OAuth 2.0 설정
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> Option<String> {
        first_env(&["GOOGLE_CLIENT_ID", "CLIENT_ID"])
    }

    /// 이 값을 로그에 출력하지 마세요.
    pub fn client_secret() -> Option<String> {
        first_env(&["GOOGLE_CLIENT_SECRET", "CLIENT_SECRET"])
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/google/secrets".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google+ API 대신 OpenID userinfo 엔드포인트를 사용합니다.
    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string())
    }

    /// 클라이언트 ID와 시크릿이 모두 설정된 경우에만 설정을 반환합니다.
    pub fn settings() -> Option<OAuthClientSettings> {
        Some(OAuthClientSettings {
            client_id: Self::client_id()?,
            client_secret: Self::client_secret()?,
            redirect_uri: Self::redirect_uri(),
            auth_uri: Self::auth_uri(),
            token_uri: Self::token_uri(),
            profile_uri: Self::userinfo_uri(),
            scope: Some("profile email".to_string()),
        })
    }
}

/// Facebook Login 설정
pub struct FacebookOAuthConfig;

impl FacebookOAuthConfig {
    pub fn app_id() -> Option<String> {
        first_env(&["FACEBOOK_APP_ID"])
    }

    pub fn app_secret() -> Option<String> {
        first_env(&["FACEBOOK_APP_SECRET"])
    }

    pub fn redirect_uri() -> String {
        env::var("FACEBOOK_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/facebook/secrets".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("FACEBOOK_AUTH_URI")
            .unwrap_or_else(|_| "https://www.facebook.com/v3.2/dialog/oauth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("FACEBOOK_TOKEN_URI")
            .unwrap_or_else(|_| "https://graph.facebook.com/v3.2/oauth/access_token".to_string())
    }

    pub fn profile_uri() -> String {
        env::var("FACEBOOK_PROFILE_URI")
            .unwrap_or_else(|_| "https://graph.facebook.com/v3.2/me".to_string())
    }

    /// 앱 ID와 시크릿이 모두 설정된 경우에만 설정을 반환합니다.
    ///
    /// Facebook은 기본 권한(public_profile)만 사용하므로 scope를 보내지 않습니다.
    pub fn settings() -> Option<OAuthClientSettings> {
        Some(OAuthClientSettings {
            client_id: Self::app_id()?,
            client_secret: Self::app_secret()?,
            redirect_uri: Self::redirect_uri(),
            auth_uri: Self::auth_uri(),
            token_uri: Self::token_uri(),
            profile_uri: Self::profile_uri(),
            scope: None,
        })
    }
}

/// OAuth 공통 보안 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth state 값의 유효 시간(분 단위). 기본값: 10
    ///
    /// 사용자가 프로바이더 로그인을 시작한 뒤 콜백까지 허용되는 최대 시간입니다.
    pub fn state_ttl_minutes() -> u64 {
        env::var("OAUTH_STATE_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|m| *m > 0)
            .unwrap_or(10)
    }

    pub fn state_ttl_seconds() -> u64 {
        Self::state_ttl_seconds_for_minutes(Self::state_ttl_minutes())
    }

    /// 분 단위 TTL을 초 단위로 변환합니다. 너무 큰 값은 `u64::MAX`로 고정됩니다.
    pub fn state_ttl_seconds_for_minutes(minutes: u64) -> u64 {
        minutes.saturating_mul(60)
    }
}

/// 지원하는 인증 공급자
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    /// 사용자명/패스워드 인증
    Local,
    /// Google OAuth 2.0 인증
    Google,
    /// Facebook Login
    Facebook,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }

    /// 사용자 문서에서 프로바이더 ID가 저장되는 필드 이름
    ///
    /// 로컬 계정은 프로바이더 ID가 없으므로 `None`을 반환합니다.
    pub fn id_field(&self) -> Option<&'static str> {
        match self {
            AuthProvider::Local => None,
            AuthProvider::Google => Some("googleId"),
            AuthProvider::Facebook => Some("facebookId"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_ttl_conversion_saturates() {
        assert_eq!(OAuthConfig::state_ttl_seconds_for_minutes(10), 600);
        assert_eq!(OAuthConfig::state_ttl_seconds_for_minutes(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_auth_provider_id_field() {
        assert_eq!(AuthProvider::Local.id_field(), None);
        assert_eq!(AuthProvider::Google.id_field(), Some("googleId"));
        assert_eq!(AuthProvider::Facebook.id_field(), Some("facebookId"));
    }

    #[test]
    fn test_auth_provider_serialization() {
        let provider = AuthProvider::Facebook;
        let json = serde_json::to_string(&provider).unwrap();
        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }

    #[test]
    fn test_oauth_endpoint_defaults() {
        if env::var("GOOGLE_USERINFO_URI").is_err() {
            assert_eq!(
                GoogleOAuthConfig::userinfo_uri(),
                "https://www.googleapis.com/oauth2/v3/userinfo"
            );
        }

        if env::var("FACEBOOK_REDIRECT_URI").is_err() {
            assert_eq!(
                FacebookOAuthConfig::redirect_uri(),
                "http://localhost:3000/auth/facebook/secrets"
            );
        }

        if env::var("OAUTH_STATE_TTL_MINUTES").is_err() {
            assert_eq!(OAuthConfig::state_ttl_seconds(), 600);
        }
    }
}
