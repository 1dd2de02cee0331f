//! # 사용자 관련 요청 DTO 모듈
//!
//! HTML 폼과 OAuth 콜백 쿼리를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 주요 기능
//!
//! - **자동 역직렬화**: `web::Form`, `web::Query` 추출자와 `serde`
//! - **입력 검증**: `validator` 크레이트를 통한 규칙 검증
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{post, web, HttpResponse};
//! use validator::Validate;
//! use crate::domain::dto::users::request::SecretForm;
//!
//! #[post("/submit")]
//! async fn submit(form: web::Form<SecretForm>) -> HttpResponse {
//!     if form.validate().is_err() {
//!         return redirect("/submit");
//!     }
//!     // ...
//! }
//! ```
//!
//! 검증 실패는 HTML 폼 흐름에 맞춰 핸들러가 이전 페이지로 리다이렉트합니다.

pub mod credentials_form;
pub mod secret_form;
pub mod oauth_callback_query;

pub use credentials_form::{CredentialsForm, PASSWORD_MAX_CHARS, USERNAME_MAX_CHARS};
pub use secret_form::{SecretForm, SECRET_MAX_CHARS};
pub use oauth_callback_query::OAuthCallbackQuery;
