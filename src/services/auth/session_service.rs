//! # 세션 서비스
//!
//! 로그인 세션의 발급, 복원, 폐기와 OAuth state 발급/소비를 담당합니다.
//!
//! ## 세션 흐름
//!
//! ```text
//! establish(user)
//!   ├─ session_id = UUID v4 (쿠키로 전달)
//!   └─ Redis: session:{sha256(session_id)} = { user_id, created_at }  (TTL)
//!
//! restore(session_id) → SessionRecord | None
//! destroy(session_id) → 레코드 삭제 + 만료 쿠키
//! ```
//!
//! Redis에는 원본 세션 ID가 저장되지 않으므로 저장소가 노출되어도
//! 쿠키를 재구성할 수 없습니다.

use std::sync::Arc;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use crate::{
    config::{AuthProvider, OAuthConfig, SessionConfig},
    domain::{entities::users::User, models::auth::SessionRecord},
    errors::AppError,
    repositories::sessions::SessionStore,
};

/// 세션 쿠키와 TTL 설정
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub ttl_seconds: u64,
    pub state_ttl_seconds: u64,
}

impl SessionSettings {
    pub fn from_env() -> Self {
        Self {
            cookie_name: SessionConfig::cookie_name(),
            cookie_secure: SessionConfig::cookie_secure(),
            ttl_seconds: SessionConfig::ttl_seconds(),
            state_ttl_seconds: OAuthConfig::state_ttl_seconds(),
        }
    }
}

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    settings: SessionSettings,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, settings: SessionSettings) -> Self {
        Self { store, settings }
    }

    pub fn cookie_name(&self) -> &str {
        &self.settings.cookie_name
    }

    /// 사용자에 대한 새 세션을 만들고 응답에 실을 쿠키를 반환합니다.
    pub async fn establish(&self, user: &User) -> Result<Cookie<'static>, AppError> {
        let user_id = user.id_string()
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자로 세션을 만들 수 없습니다".to_string()))?;

        let session_id = Uuid::new_v4().to_string();
        let record = SessionRecord::new(user_id);

        self.store
            .save_session(&hash_session_id(&session_id), &record, self.settings.ttl_seconds)
            .await?;

        log::debug!("세션 발급: user={}", record.user_id);

        Ok(self.session_cookie(session_id))
    }

    /// 쿠키 값으로 세션 레코드를 찾습니다. 만료되었거나 없으면 `None`.
    pub async fn restore(&self, session_id: &str) -> Result<Option<SessionRecord>, AppError> {
        if session_id.is_empty() {
            return Ok(None);
        }
        self.store.load_session(&hash_session_id(session_id)).await
    }

    /// 세션 레코드를 삭제합니다.
    pub async fn destroy(&self, session_id: &str) -> Result<(), AppError> {
        self.store.remove_session(&hash_session_id(session_id)).await
    }

    /// 브라우저의 세션 쿠키를 지우는 쿠키
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.settings.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.settings.cookie_secure)
            .finish();
        cookie.make_removal();
        cookie
    }

    /// OAuth 시작 시 사용할 state를 발급하고 저장합니다.
    pub async fn issue_oauth_state(&self, provider: AuthProvider) -> Result<String, AppError> {
        let state = Uuid::new_v4().simple().to_string();

        self.store
            .save_oauth_state(&state, provider, self.settings.state_ttl_seconds)
            .await?;

        Ok(state)
    }

    /// 콜백으로 돌아온 state를 소비합니다.
    ///
    /// 저장된 적 없거나, 만료되었거나, 이미 사용되었거나, 다른 프로바이더용으로
    /// 발급된 state는 `false`입니다.
    pub async fn consume_oauth_state(&self, state: &str, provider: AuthProvider) -> Result<bool, AppError> {
        if state.is_empty() {
            return Ok(false);
        }

        match self.store.take_oauth_state(state).await? {
            Some(issued_for) if issued_for == provider => Ok(true),
            Some(issued_for) => {
                log::warn!(
                    "OAuth state 프로바이더 불일치: 발급={}, 콜백={}",
                    issued_for.as_str(),
                    provider.as_str()
                );
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn session_cookie(&self, session_id: String) -> Cookie<'static> {
        Cookie::build(self.settings.cookie_name.clone(), session_id)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.settings.cookie_secure)
            .max_age(Duration::seconds(i64::try_from(self.settings.ttl_seconds).unwrap_or(i64::MAX)))
            .finish()
    }
}

/// 세션 ID를 저장소 키로 쓰기 위한 SHA-256 hex
pub fn hash_session_id(session_id: &str) -> String {
    format!("{:x}", Sha256::digest(session_id.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::testing::{test_session_settings, InMemorySessionStore};

    fn service() -> (SessionService, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::default());
        (SessionService::new(store.clone(), test_session_settings()), store)
    }

    fn saved_user() -> User {
        let mut user = User::new_local("alice".to_string(), "hash".to_string());
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_hash_session_id() {
        let hash = hash_session_id("abc");
        assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
        assert_ne!(hash_session_id("abd"), hash);
    }

    #[actix_web::test]
    async fn test_establish_and_restore() {
        let (service, store) = service();
        let user = saved_user();

        let cookie = service.establish(&user).await.unwrap();

        assert_eq!(cookie.name(), "secrets.sid");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        // 저장소에는 해시만 기록
        assert!(!store.has_session(cookie.value()));
        assert!(store.has_session(&hash_session_id(cookie.value())));

        let record = service.restore(cookie.value()).await.unwrap().unwrap();
        assert_eq!(record.user_id, user.id_string().unwrap());
    }

    #[actix_web::test]
    async fn test_establish_requires_saved_user() {
        let (service, _) = service();
        let unsaved = User::new_local("bob".to_string(), "hash".to_string());

        assert!(matches!(service.establish(&unsaved).await, Err(AppError::InternalError(_))));
    }

    #[actix_web::test]
    async fn test_destroy_invalidates_session() {
        let (service, _) = service();
        let cookie = service.establish(&saved_user()).await.unwrap();

        service.destroy(cookie.value()).await.unwrap();

        assert!(service.restore(cookie.value()).await.unwrap().is_none());
        assert!(service.restore("unknown").await.unwrap().is_none());
        assert!(service.restore("").await.unwrap().is_none());
    }

    #[test]
    fn test_removal_cookie_expires() {
        let (service, _) = service();
        let cookie = service.removal_cookie();

        assert_eq!(cookie.name(), "secrets.sid");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[actix_web::test]
    async fn test_oauth_state_is_single_use() {
        let (service, _) = service();
        let state = service.issue_oauth_state(AuthProvider::Google).await.unwrap();

        assert!(service.consume_oauth_state(&state, AuthProvider::Google).await.unwrap());
        assert!(!service.consume_oauth_state(&state, AuthProvider::Google).await.unwrap());
        assert!(!service.consume_oauth_state("", AuthProvider::Google).await.unwrap());
    }

    #[actix_web::test]
    async fn test_oauth_state_bound_to_provider() {
        let (service, _) = service();
        let state = service.issue_oauth_state(AuthProvider::Facebook).await.unwrap();

        assert!(!service.consume_oauth_state(&state, AuthProvider::Google).await.unwrap());
        // 불일치로 소비된 state는 다시 쓸 수 없음
        assert!(!service.consume_oauth_state(&state, AuthProvider::Facebook).await.unwrap());
    }
}
