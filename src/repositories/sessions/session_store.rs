//! 세션 저장소 추상화

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::models::auth::SessionRecord;
use crate::errors::AppError;

/// 로그인 세션과 OAuth state 저장소
///
/// 세션 키는 쿠키 값이 아니라 그 해시입니다. 해시 계산은 세션 서비스가 담당합니다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save_session(&self, session_hash: &str, record: &SessionRecord, ttl_seconds: u64) -> Result<(), AppError>;

    async fn load_session(&self, session_hash: &str) -> Result<Option<SessionRecord>, AppError>;

    async fn remove_session(&self, session_hash: &str) -> Result<(), AppError>;

    /// OAuth 시작 시 발급한 state와 해당 프로바이더를 기록합니다.
    async fn save_oauth_state(&self, state: &str, provider: AuthProvider, ttl_seconds: u64) -> Result<(), AppError>;

    /// state를 한 번만 꺼낼 수 있도록 읽으면서 삭제합니다.
    async fn take_oauth_state(&self, state: &str) -> Result<Option<AuthProvider>, AppError>;
}
