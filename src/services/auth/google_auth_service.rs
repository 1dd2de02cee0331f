//! # Google OAuth 2.0 인증 서비스
//!
//! Google 로그인의 인증 URL 생성, Authorization Code 교환,
//! OpenID userinfo 조회를 담당합니다.
//!
//! ## OAuth 2.0 플로우
//!
//! ```text
//! 1. GET /auth/google            → Google 인증 페이지로 리다이렉트 (scope: profile email)
//! 2. 사용자 동의
//! 3. GET /auth/google/secrets    ← code, state
//! 4. POST token_uri              → access_token
//! 5. GET userinfo_uri (Bearer)   → sub, email
//! 6. googleId로 find-or-create   → 세션 발급 → /secrets
//! ```
//!
//! ## 환경 설정
//!
//! ```bash
//! GOOGLE_CLIENT_ID=your_client_id.apps.googleusercontent.com
//! GOOGLE_CLIENT_SECRET=your_client_secret
//! GOOGLE_REDIRECT_URI=http://localhost:3000/auth/google/secrets
//! ```

use async_trait::async_trait;
use crate::{
    config::{AuthProvider, GoogleOAuthConfig, OAuthClientSettings},
    domain::models::oauth::{GoogleUserInfo, OAuthProfile},
    errors::AppError,
};
use super::oauth_provider::{build_authorize_url, exchange_code_for_token, missing_settings, OAuthProvider};

pub struct GoogleAuthService {
    settings: Option<OAuthClientSettings>,
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(settings: Option<OAuthClientSettings>, http: reqwest::Client) -> Self {
        Self { settings, http }
    }

    /// 환경 변수 설정으로 생성합니다. 클라이언트 ID/시크릿이 없으면 경고만 남깁니다.
    pub fn from_env(http: reqwest::Client) -> Self {
        let settings = GoogleOAuthConfig::settings();
        if settings.is_none() {
            log::warn!("GOOGLE_CLIENT_ID/GOOGLE_CLIENT_SECRET 미설정: Google 로그인을 사용할 수 없습니다");
        }
        Self::new(settings, http)
    }

    fn settings(&self) -> Result<&OAuthClientSettings, AppError> {
        self.settings.as_ref().ok_or_else(|| missing_settings(AuthProvider::Google))
    }

    async fn get_user_info(&self, settings: &OAuthClientSettings, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = self.http
            .get(&settings.profile_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuthProvider for GoogleAuthService {
    fn authorize_url(&self, state: &str) -> Result<String, AppError> {
        Ok(build_authorize_url(self.settings()?, state))
    }

    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, AppError> {
        let settings = self.settings()?;

        let token = exchange_code_for_token(&self.http, settings, AuthProvider::Google, code).await?;
        let user_info = self.get_user_info(settings, &token.access_token).await?;

        if user_info.email_verified == Some(false) {
            log::warn!("검증되지 않은 Google 이메일: sub={}", user_info.sub);
        }

        Ok(OAuthProfile::from(user_info))
    }
}
