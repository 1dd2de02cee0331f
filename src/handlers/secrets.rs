//! 시크릿 핸들러
//!
//! 모든 핸들러는 [`SessionMiddleware`](crate::middlewares::SessionMiddleware)로
//! 보호된 리소스에 등록되며, [`AuthenticatedUser`] 추출자로 로그인 사용자를 받습니다.

use actix_web::{web, HttpResponse};
use minijinja::context;
use crate::core::AppState;
use crate::domain::dto::users::request::{SecretForm, SECRET_MAX_CHARS};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::views;
use super::{redirect, SECRETS_PATH, SUBMIT_PATH};

/// `GET /submit`
pub async fn submit_page(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.views.page(views::SUBMIT, context! { secret_max => SECRET_MAX_CHARS })
}

/// `POST /submit`
///
/// 검증 실패나 저장 실패 시 별도 안내 없이 `/submit`으로 돌려보냅니다.
pub async fn submit_secret(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    form: web::Form<SecretForm>,
) -> HttpResponse {
    match state.users.submit_secret(&user.user_id, &form).await {
        Ok(()) => redirect(SECRETS_PATH),
        Err(AppError::ValidationError(reason)) => {
            log::info!("시크릿 거부 - 사용자: {}, 사유: {}", user.user_id, reason);
            redirect(SUBMIT_PATH)
        }
        Err(e) => {
            log::error!("시크릿 저장 실패 - 사용자: {}, 에러: {}", user.user_id, e);
            redirect(SUBMIT_PATH)
        }
    }
}

/// `GET /secrets`
///
/// 모든 사용자의 시크릿을 한 페이지에 보여줍니다.
pub async fn secrets_page(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let secrets = state.users.all_secrets().await?;

    state.views.page(views::SECRETS, context! { secrets => secrets })
}
