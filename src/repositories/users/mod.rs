//! 사용자 저장소
//!
//! - [`UserStore`] - 서비스 계층이 의존하는 저장소 trait
//! - [`UserRepository`] - MongoDB 구현체

pub mod user_store;
pub mod user_repo;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
