//! # Facebook Login 서비스
//!
//! Graph API v3.2를 사용하는 Facebook 로그인입니다. 기본 권한(public_profile)만
//! 요청하므로 scope를 보내지 않고, 프로필은 `id`와 `name`만 조회합니다.
//!
//! ```bash
//! FACEBOOK_APP_ID=your_app_id
//! FACEBOOK_APP_SECRET=your_app_secret
//! FACEBOOK_REDIRECT_URI=http://localhost:3000/auth/facebook/secrets
//! ```

use async_trait::async_trait;
use crate::{
    config::{AuthProvider, FacebookOAuthConfig, OAuthClientSettings},
    domain::models::oauth::{FacebookUser, OAuthProfile},
    errors::AppError,
};
use super::oauth_provider::{build_authorize_url, exchange_code_for_token, missing_settings, OAuthProvider};

/// 프로필 조회 시 요청할 필드
const PROFILE_FIELDS: &str = "id,name";

pub struct FacebookAuthService {
    settings: Option<OAuthClientSettings>,
    http: reqwest::Client,
}

impl FacebookAuthService {
    pub fn new(settings: Option<OAuthClientSettings>, http: reqwest::Client) -> Self {
        Self { settings, http }
    }

    pub fn from_env(http: reqwest::Client) -> Self {
        let settings = FacebookOAuthConfig::settings();
        if settings.is_none() {
            log::warn!("FACEBOOK_APP_ID/FACEBOOK_APP_SECRET 미설정: Facebook 로그인을 사용할 수 없습니다");
        }
        Self::new(settings, http)
    }

    fn settings(&self) -> Result<&OAuthClientSettings, AppError> {
        self.settings.as_ref().ok_or_else(|| missing_settings(AuthProvider::Facebook))
    }

    async fn get_me(&self, settings: &OAuthClientSettings, access_token: &str) -> Result<FacebookUser, AppError> {
        let response = self.http
            .get(&settings.profile_uri)
            .query(&[("fields", PROFILE_FIELDS), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Facebook 프로필 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Facebook 프로필 조회 실패: {}", error_text
            )));
        }

        response
            .json::<FacebookUser>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Facebook 프로필 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuthProvider for FacebookAuthService {
    fn authorize_url(&self, state: &str) -> Result<String, AppError> {
        Ok(build_authorize_url(self.settings()?, state))
    }

    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, AppError> {
        let settings = self.settings()?;

        let token = exchange_code_for_token(&self.http, settings, AuthProvider::Facebook, code).await?;
        let me = self.get_me(settings, &token.access_token).await?;

        Ok(OAuthProfile::from(me))
    }
}
