//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티를 정의합니다.
//!
//! ## MongoDB 통합
//!
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **sparse 인덱스**: 선택 필드(`username`, `googleId`, `facebookId`)는
//!   값이 있을 때만 저장되어 unique 인덱스와 충돌하지 않음
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs
//! └── users/
//!     ├── mod.rs
//!     └── user.rs     ← User 엔티티
//! ```

pub mod users;

pub use users::*;
