//! # Core Module
//!
//! 요청 처리 전반에서 공유되는 애플리케이션 상태를 제공합니다.
//!
//! ## 의존성 조립
//!
//! 서비스는 전역 싱글톤 대신 `main`에서 한 번 생성되어 [`AppState`]에 담기고,
//! 핸들러와 미들웨어는 `web::Data<AppState>`로 접근합니다.
//!
//! ```rust,ignore
//! let state = AppState::new(user_service, session_service, google, facebook, views);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(state.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod state;

pub use state::AppState;
