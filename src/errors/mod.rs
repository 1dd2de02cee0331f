//! 에러 처리 모듈
//!
//! 모든 계층이 공유하는 [`errors::AppError`]와 HTTP 응답 매핑을 제공합니다.

pub mod errors;

pub use errors::*;
