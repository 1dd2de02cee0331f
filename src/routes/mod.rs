//! 라우트 설정 모듈
//!
//! 페이지, 인증, 시크릿 라우트를 기능별로 등록합니다.
//!
//! # Route Groups
//!
//! ## Public
//! - `GET /`, `GET /login`, `GET /register`, `GET /css/styles.css`
//! - `POST /register`, `POST /login`, `GET /logout`
//! - `GET /auth/google`, `GET /auth/google/secrets`
//! - `GET /auth/facebook`, `GET /auth/facebook/secrets`
//! - `GET /health`
//!
//! ## 세션 필요
//! - `GET /submit`, `POST /submit`, `GET /secrets`
//!
//! 세션이 없거나 만료된 요청은 [`SessionMiddleware`]가 `/login`으로 리다이렉트합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::middlewares::SessionMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_secret_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_page)
        .service(handlers::pages::register_page)
        .service(handlers::pages::stylesheet);
}

/// 로컬 인증과 OAuth 라우트
///
/// 인증을 시작하는 엔드포인트이므로 모두 세션 없이 접근 가능합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // 로컬 인증
        .service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        // Google OAuth
        .service(handlers::oauth::google_login)
        .service(handlers::oauth::google_callback)
        // Facebook OAuth
        .service(handlers::oauth::facebook_login)
        .service(handlers::oauth::facebook_callback);
}

/// 세션이 필요한 시크릿 라우트
fn configure_secret_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/submit")
            .wrap(SessionMiddleware::required())
            .route(web::get().to(handlers::secrets::submit_page))
            .route(web::post().to(handlers::secrets::submit_secret))
    );

    cfg.service(
        web::resource("/secrets")
            .wrap(SessionMiddleware::required())
            .route(web::get().to(handlers::secrets::secrets_page))
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "secrets_board",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": { "database": "MongoDB", "sessions": "Redis" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::Result<web::Json<serde_json::Value>> {
    Ok(web::Json(json!({
        "status": "healthy",
        "service": "secrets_board",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": "Redis",
            "auth": ["local", "google", "facebook"]
        }
    })))
}
