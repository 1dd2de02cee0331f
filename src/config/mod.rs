//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `main`에서 `PROFILE`에 맞는
//! `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, 세션, 요청 제한, 패스워드 해싱 설정
//! - [`auth_config`] - Google/Facebook OAuth 클라이언트와 인증 공급자 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, SessionConfig, GoogleOAuthConfig};
//!
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let cookie = SessionConfig::cookie_name();
//! let google = GoogleOAuthConfig::settings(); // 미설정 시 None
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="userDB"
//! export REDIS_URL="redis://localhost:6379"
//! export SESSION_TTL_HOURS="24"
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
