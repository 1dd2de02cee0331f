//! 인증 서비스 모듈
//!
//! - [`SessionService`] - 로그인 세션과 OAuth state
//! - [`OAuthProvider`] - 프로바이더 공통 인터페이스
//! - [`GoogleAuthService`], [`FacebookAuthService`] - 프로바이더 구현체

pub mod session_service;
pub mod oauth_provider;
pub mod google_auth_service;
pub mod facebook_auth_service;

pub use session_service::{SessionService, SessionSettings};
pub use oauth_provider::OAuthProvider;
pub use google_auth_service::GoogleAuthService;
pub use facebook_auth_service::FacebookAuthService;
