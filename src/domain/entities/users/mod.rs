//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//! 로컬 계정과 OAuth 계정을 모두 표현하는 단일 [`User`] 문서 타입을 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local("alice".to_string(), hashed_password);
//!
//! // OAuth 사용자 생성
//! let oauth_user = User::new_oauth(
//!     AuthProvider::Google,
//!     "google_user_id_123".to_string(),
//!     Some("user@gmail.com".to_string()),
//! );
//! ```

pub mod user;

pub use user::User;
