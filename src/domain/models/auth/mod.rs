//! 인증 관련 도메인 모델
//!
//! - [`AuthenticatedUser`] - 요청 단위로 복원되는 로그인 사용자
//! - [`SessionRecord`] - Redis에 보관되는 세션 데이터

pub mod authenticated_user;
pub mod session_record;

pub use authenticated_user::AuthenticatedUser;
pub use session_record::SessionRecord;
