//! Authentication HTTP Handlers
//!
//! 로컬 계정의 회원가입, 로그인과 로그아웃을 처리합니다.
//!
//! | 요청 | 성공 | 실패 |
//! |------|------|------|
//! | `POST /register` | `/secrets` | `/register` |
//! | `POST /login` | `/secrets` | `/login` |
//! | `GET /logout` | `/` | - |

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use crate::core::AppState;
use crate::domain::dto::users::request::CredentialsForm;
use crate::errors::AppError;
use super::{redirect, redirect_with_cookie, start_session, HOME_PATH, REGISTER_PATH};

#[post("/register")]
pub async fn register(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let user = match state.users.register(&form).await {
        Ok(user) => user,
        Err(AppError::ConflictError(reason) | AppError::ValidationError(reason)) => {
            log::info!("회원가입 거부: {}", reason);
            return Ok(redirect(REGISTER_PATH));
        }
        Err(e) => {
            log::error!("회원가입 실패: {}", e);
            return Ok(redirect(REGISTER_PATH));
        }
    };

    start_session(&req, &state, &user).await
}

/// 인증 실패는 `AppError::AuthenticationError`로 전파되어 `/login`으로 리다이렉트됩니다.
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.authenticate(&form).await.map_err(|e| {
        log::info!("로그인 실패 - 사용자: {}, 사유: {}", form.normalized_username(), e);
        e
    })?;

    log::info!("로컬 로그인 성공 - 사용자: {}", form.normalized_username());

    start_session(&req, &state, &user).await
}

#[get("/logout")]
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if let Some(cookie) = req.cookie(state.sessions.cookie_name()) {
        if let Err(e) = state.sessions.destroy(cookie.value()).await {
            log::error!("세션 삭제 실패: {}", e);
        }
    }

    redirect_with_cookie(HOME_PATH, state.sessions.removal_cookie())
}
