//! 시크릿 보드 웹 애플리케이션
//!
//! 사용자가 익명으로 시크릿을 남기고 모든 로그인 사용자가 함께 보는
//! 서버 렌더링 웹 애플리케이션입니다.
//!
//! # Features
//!
//! - **로컬 계정**: 사용자명/비밀번호 회원가입과 로그인 (bcrypt)
//! - **OAuth 2.0**: Google, Facebook 소셜 로그인 (find-or-create)
//! - **세션 인증**: HttpOnly 쿠키 + Redis 세션 저장소
//! - **시크릿 보드**: 로그인 사용자만 제출과 조회 가능
//! - **MongoDB**: 사용자와 시크릿 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지/폼 엔드포인트, SessionMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 처리, 리다이렉트, 템플릿 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 회원가입/인증, 세션, OAuth 프로바이더
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod views;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod testing;
