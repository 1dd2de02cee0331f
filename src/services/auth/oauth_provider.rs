//! # OAuth 프로바이더 추상화
//!
//! Authorization Code 플로우에서 프로바이더마다 다른 부분은
//! 인증 URL 생성과 프로필 조회뿐입니다. 토큰 교환은 공통 함수로 처리합니다.

use async_trait::async_trait;
use crate::{
    config::{AuthProvider, OAuthClientSettings},
    domain::models::oauth::{OAuthProfile, OAuthTokenResponse},
    errors::AppError,
};

/// OAuth 2.0 프로바이더
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// 사용자를 보낼 프로바이더 인증 페이지 URL
    ///
    /// 클라이언트 설정이 없으면 `InternalError`입니다.
    fn authorize_url(&self, state: &str) -> Result<String, AppError>;

    /// Authorization Code를 액세스 토큰으로 교환하고 프로필을 조회합니다.
    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, AppError>;
}

/// 설정이 없을 때의 오류
pub(crate) fn missing_settings(provider: AuthProvider) -> AppError {
    AppError::InternalError(format!("{} OAuth 클라이언트가 설정되지 않았습니다", provider.as_str()))
}

/// 인증 URL을 조립합니다.
///
/// `client_id`, `redirect_uri`, `response_type=code`, `scope`(있을 때), `state`를
/// 쿼리 문자열로 붙입니다.
pub(crate) fn build_authorize_url(settings: &OAuthClientSettings, state: &str) -> String {
    let mut params = vec![
        ("client_id", settings.client_id.as_str()),
        ("redirect_uri", settings.redirect_uri.as_str()),
        ("response_type", "code"),
    ];
    if let Some(scope) = settings.scope.as_deref() {
        params.push(("scope", scope));
    }
    params.push(("state", state));

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if settings.auth_uri.contains('?') { '&' } else { '?' };
    format!("{}{}{}", settings.auth_uri, separator, query_string)
}

/// Authorization Code를 액세스 토큰으로 교환합니다.
pub(crate) async fn exchange_code_for_token(
    http: &reqwest::Client,
    settings: &OAuthClientSettings,
    provider: AuthProvider,
    code: &str,
) -> Result<OAuthTokenResponse, AppError> {
    let params = [
        ("code", code),
        ("client_id", settings.client_id.as_str()),
        ("client_secret", settings.client_secret.as_str()),
        ("redirect_uri", settings.redirect_uri.as_str()),
        ("grant_type", "authorization_code"),
    ];

    let response = http
        .post(&settings.token_uri)
        .form(&params)
        .send()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", provider.as_str(), e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(AppError::ExternalServiceError(format!(
            "{} 토큰 교환 실패 ({}): {}", provider.as_str(), status, error_text
        )));
    }

    response
        .json::<OAuthTokenResponse>()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 응답 파싱 실패: {}", provider.as_str(), e)))
}
