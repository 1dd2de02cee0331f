//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델과 외부 시스템 통합 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB에 저장되는 문서 (`User`)
//! - **Models** (`./`): 요청 단위 인증 정보, Redis 세션 레코드, OAuth 응답
//!
//! ```text
//! models/
//! ├── auth/    - AuthenticatedUser, SessionRecord
//! └── oauth/   - 프로바이더 응답과 공통 프로필
//! ```

pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
