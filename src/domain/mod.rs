//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서 (User)
//! ├── DTOs          - HTML 폼과 쿼리 파라미터
//! └── Models        - 세션, 인증 사용자, OAuth 프로필
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, MongoDB, Redis)
//! ```
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::{CredentialsForm, User};
//!
//! // 1. 폼 입력 검증
//! form.validate()?;
//!
//! // 2. 도메인 엔티티 생성
//! let user = User::new_local(form.username, bcrypt::hash(&form.password, cost)?);
//!
//! // 3. 리포지토리를 통한 영속화
//! let saved_user = user_store.create(user).await?;
//! ```
//!
//! ## OAuth 통합 플로우
//!
//! ```rust,ignore
//! // 1. 프로바이더에서 프로필 받기
//! let profile: OAuthProfile = provider.fetch_profile(&code).await?;
//!
//! // 2. 프로바이더 ID로 찾거나 생성 (원자적 upsert)
//! let user = user_service.find_or_create_oauth(&profile).await?;
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
