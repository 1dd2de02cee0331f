//! 비즈니스 로직 계층
//!
//! 서비스는 저장소 trait에만 의존하며, `main`에서 조립되어
//! [`AppState`](crate::core::state::AppState)로 핸들러에 전달됩니다.

pub mod users;
pub mod auth;
