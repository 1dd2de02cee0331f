//! Redis 세션 리포지토리
//!
//! | 키 | 값 | TTL |
//! |----|----|-----|
//! | `session:{sha256(session_id)}` | [`SessionRecord`] JSON | `SESSION_TTL_HOURS` |
//! | `oauth_state:{state}` | [`AuthProvider`] JSON | `OAUTH_STATE_TTL_MINUTES` |

use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::config::AuthProvider;
use crate::domain::models::auth::SessionRecord;
use crate::errors::AppError;
use super::session_store::SessionStore;

#[derive(Clone)]
pub struct SessionRepository {
    redis: RedisClient,
}

impl SessionRepository {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn session_key(session_hash: &str) -> String {
        format!("session:{}", session_hash)
    }

    fn state_key(state: &str) -> String {
        format!("oauth_state:{}", state)
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn save_session(&self, session_hash: &str, record: &SessionRecord, ttl_seconds: u64) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&Self::session_key(session_hash), record, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn load_session(&self, session_hash: &str) -> Result<Option<SessionRecord>, AppError> {
        Ok(self.redis.get::<SessionRecord>(&Self::session_key(session_hash)).await?)
    }

    async fn remove_session(&self, session_hash: &str) -> Result<(), AppError> {
        self.redis.del(&Self::session_key(session_hash)).await?;
        Ok(())
    }

    async fn save_oauth_state(&self, state: &str, provider: AuthProvider, ttl_seconds: u64) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&Self::state_key(state), &provider, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn take_oauth_state(&self, state: &str) -> Result<Option<AuthProvider>, AppError> {
        Ok(self.redis.take::<AuthProvider>(&Self::state_key(state)).await?)
    }
}
