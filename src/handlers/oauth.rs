//! OAuth 2.0 HTTP Handlers
//!
//! ```text
//! GET /auth/{provider}          → state 발급 → 프로바이더 인증 페이지로 302
//! GET /auth/{provider}/secrets  ← code, state
//!     ├─ error 파라미터 / state 불일치 → /login
//!     ├─ 토큰 교환 + 프로필 조회 실패  → 500
//!     └─ find-or-create → 세션 발급    → /secrets
//! ```

use actix_web::{get, web, HttpRequest, HttpResponse};
use crate::config::AuthProvider;
use crate::core::AppState;
use crate::domain::dto::users::request::OAuthCallbackQuery;
use crate::errors::{AppError, LOGIN_PATH};
use super::{redirect, start_session};

#[get("/auth/google")]
pub async fn google_login(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    begin_oauth(&state, AuthProvider::Google).await
}

#[get("/auth/google/secrets")]
pub async fn google_callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    complete_oauth(&req, &state, AuthProvider::Google, &query).await
}

#[get("/auth/facebook")]
pub async fn facebook_login(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    begin_oauth(&state, AuthProvider::Facebook).await
}

#[get("/auth/facebook/secrets")]
pub async fn facebook_callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    complete_oauth(&req, &state, AuthProvider::Facebook, &query).await
}

async fn begin_oauth(state: &AppState, provider: AuthProvider) -> Result<HttpResponse, AppError> {
    let oauth = state.oauth_provider(provider)?;
    let oauth_state = state.sessions.issue_oauth_state(provider).await?;
    let url = oauth.authorize_url(&oauth_state)?;

    log::debug!("{} OAuth 시작", provider.as_str());
    Ok(redirect(&url))
}

async fn complete_oauth(
    req: &HttpRequest,
    state: &AppState,
    provider: AuthProvider,
    query: &OAuthCallbackQuery,
) -> Result<HttpResponse, AppError> {
    if let Some(error) = query.provider_error() {
        log::warn!("{} OAuth 에러: {}", provider.as_str(), error);
        return Ok(redirect(LOGIN_PATH));
    }

    let (Some(code), Some(oauth_state)) = (query.code.as_deref(), query.state.as_deref()) else {
        log::warn!("{} OAuth 콜백에 code 또는 state가 없습니다", provider.as_str());
        return Ok(redirect(LOGIN_PATH));
    };

    if !state.sessions.consume_oauth_state(oauth_state, provider).await? {
        log::warn!("{} OAuth state가 유효하지 않습니다", provider.as_str());
        return Ok(redirect(LOGIN_PATH));
    }

    let profile = state.oauth_provider(provider)?.fetch_profile(code).await?;
    let user = state.users.find_or_create_oauth(&profile).await?;

    start_session(req, state, &user).await
}
