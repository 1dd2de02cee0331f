//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - 세션 쿠키에서 세션 ID 추출
//! - Redis 세션 레코드와 사용자 문서로 로그인 사용자 복원
//! - 사용자 정보를 request extension에 저장
//! - 복원 실패 시 `/login`으로 302 리다이렉트
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::SessionMiddleware;
//!
//! cfg.service(
//!     web::resource("/submit")
//!         .wrap(SessionMiddleware::required()) // 보호된 라우트에만 적용
//!         .route(web::get().to(submit_page))
//!         .route(web::post().to(submit_secret))
//! );
//! ```

pub mod session_middleware;
mod session_inner;

// 미들웨어 재export
pub use session_middleware::SessionMiddleware;
