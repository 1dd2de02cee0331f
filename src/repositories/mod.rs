//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소마다 서비스가 의존하는 trait과 실제 구현체를 함께 둡니다.
//! MongoDB는 사용자 문서를, Redis는 세션과 OAuth state를 보관합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(&database);
//! user_repo.create_indexes().await?;
//! let user = user_repo.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod sessions;
