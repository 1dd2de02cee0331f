//! HTTP 요청 핸들러 모듈
//!
//! 브라우저 폼 흐름을 처리하는 핸들러들입니다. 성공과 실패 모두
//! 페이지 렌더링 또는 302 리다이렉트로 응답합니다.
//!
//! # Modules
//!
//! - [`pages`] - 공개 페이지(home, login, register)와 스타일시트
//! - [`auth`] - 회원가입, 로컬 로그인, 로그아웃
//! - [`oauth`] - Google/Facebook OAuth 시작과 콜백
//! - [`secrets`] - 시크릿 제출과 조회 (세션 필요)

pub mod pages;
pub mod auth;
pub mod oauth;
pub mod secrets;

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use crate::core::AppState;
use crate::domain::entities::users::User;
use crate::errors::AppError;

pub const HOME_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/register";
pub const SUBMIT_PATH: &str = "/submit";
pub const SECRETS_PATH: &str = "/secrets";

/// 302 Found 리다이렉트 응답
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn redirect_with_cookie(location: &str, cookie: Cookie<'static>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .finish()
}

/// 로그인에 성공한 사용자에게 새 세션을 발급하고 `/secrets`로 보냅니다.
///
/// 요청에 이전 세션 쿠키가 있으면 그 세션은 먼저 폐기합니다.
pub(crate) async fn start_session(
    req: &HttpRequest,
    state: &AppState,
    user: &User,
) -> Result<HttpResponse, AppError> {
    if let Some(previous) = req.cookie(state.sessions.cookie_name()) {
        if let Err(e) = state.sessions.destroy(previous.value()).await {
            log::warn!("이전 세션 폐기 실패: {}", e);
        }
    }

    let cookie = state.sessions.establish(user).await?;
    Ok(redirect_with_cookie(SECRETS_PATH, cookie))
}
