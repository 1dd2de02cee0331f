//! 공개 페이지 핸들러

use actix_web::{get, web, HttpResponse};
use minijinja::context;
use crate::core::AppState;
use crate::domain::dto::users::request::{PASSWORD_MAX_CHARS, USERNAME_MAX_CHARS};
use crate::errors::AppError;
use crate::views;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.views.page(views::HOME, context! {})
}

#[get("/login")]
pub async fn login_page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.views.page(views::LOGIN, context! {})
}

#[get("/register")]
pub async fn register_page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.views.page(views::REGISTER, context! {
        username_max => USERNAME_MAX_CHARS,
        password_max => PASSWORD_MAX_CHARS,
    })
}

#[get("/css/styles.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(views::STYLESHEET)
}
