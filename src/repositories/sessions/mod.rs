//! 세션 저장소
//!
//! - [`SessionStore`] - 세션 서비스가 의존하는 저장소 trait
//! - [`SessionRepository`] - Redis 구현체

pub mod session_store;
pub mod session_repo;

pub use session_store::SessionStore;
pub use session_repo::SessionRepository;
