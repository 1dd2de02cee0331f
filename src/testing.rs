//! 테스트용 메모리 저장소와 프로바이더
//!
//! MongoDB, Redis, 외부 OAuth 서버 없이 서비스와 HTTP 흐름을 검증할 수 있도록
//! 각 추상화의 메모리 구현체를 제공합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    config::AuthProvider,
    core::AppState,
    domain::{entities::users::User, models::{auth::SessionRecord, oauth::OAuthProfile}},
    errors::AppError,
    repositories::{sessions::SessionStore, users::UserStore},
    services::{
        auth::{OAuthProvider, SessionService, SessionSettings},
        users::UserService,
    },
    views::ViewRenderer,
};

/// 테스트에서 사용하는 bcrypt cost (최소값)
pub const TEST_BCRYPT_COST: u32 = 4;

/// 스텁 프로바이더가 토큰 교환 실패로 응답하는 code
pub const FAILING_CODE: &str = "fail";

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username.as_deref() == Some(username)).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if user.username.is_some() && users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_or_create_by_provider(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
        email: Option<&str>,
    ) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter().find(|u| u.provider_id(provider) == Some(provider_user_id)) {
            return Ok(existing.clone());
        }

        let mut user = User::new_oauth(provider, provider_user_id.to_string(), email.map(str::to_string));
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn push_secret(&self, id: &str, secret: &str) -> Result<bool, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == Some(object_id)) {
            Some(user) => {
                user.secrets.push(secret.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_all_with_secrets(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

/// TTL은 무시하는 세션 저장소
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
    states: Mutex<HashMap<String, AuthProvider>>,
}

impl InMemorySessionStore {
    pub fn has_session(&self, session_hash: &str) -> bool {
        self.sessions.lock().unwrap().contains_key(session_hash)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.lock().unwrap().contains_key(state)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save_session(&self, session_hash: &str, record: &SessionRecord, _ttl_seconds: u64) -> Result<(), AppError> {
        self.sessions.lock().unwrap().insert(session_hash.to_string(), record.clone());
        Ok(())
    }

    async fn load_session(&self, session_hash: &str) -> Result<Option<SessionRecord>, AppError> {
        Ok(self.sessions.lock().unwrap().get(session_hash).cloned())
    }

    async fn remove_session(&self, session_hash: &str) -> Result<(), AppError> {
        self.sessions.lock().unwrap().remove(session_hash);
        Ok(())
    }

    async fn save_oauth_state(&self, state: &str, provider: AuthProvider, _ttl_seconds: u64) -> Result<(), AppError> {
        self.states.lock().unwrap().insert(state.to_string(), provider);
        Ok(())
    }

    async fn take_oauth_state(&self, state: &str) -> Result<Option<AuthProvider>, AppError> {
        Ok(self.states.lock().unwrap().remove(state))
    }
}

/// 네트워크 없이 code를 그대로 프로바이더 사용자 ID로 돌려주는 프로바이더
pub struct StubOAuthProvider {
    provider: AuthProvider,
}

impl StubOAuthProvider {
    pub fn new(provider: AuthProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl OAuthProvider for StubOAuthProvider {
    fn authorize_url(&self, state: &str) -> Result<String, AppError> {
        Ok(format!("https://stub.example/{}/authorize?state={}", self.provider.as_str(), state))
    }

    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, AppError> {
        if code == FAILING_CODE {
            return Err(AppError::ExternalServiceError("token exchange failed".to_string()));
        }

        Ok(OAuthProfile {
            provider: self.provider,
            provider_user_id: format!("{}-user-{}", self.provider.as_str(), code),
            email: match self.provider {
                AuthProvider::Google => Some(format!("{}@example.com", code)),
                _ => None,
            },
            display_name: None,
        })
    }
}

pub fn test_session_settings() -> SessionSettings {
    SessionSettings {
        cookie_name: "secrets.sid".to_string(),
        cookie_secure: false,
        ttl_seconds: 3600,
        state_ttl_seconds: 600,
    }
}

/// 메모리 구현체로 조립한 [`AppState`]와 그 저장소 핸들
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserStore>,
    pub sessions: Arc<InMemorySessionStore>,
}

pub fn test_state() -> TestContext {
    let users = Arc::new(InMemoryUserStore::default());
    let sessions = Arc::new(InMemorySessionStore::default());

    let state = AppState::new(
        UserService::new(users.clone(), TEST_BCRYPT_COST),
        SessionService::new(sessions.clone(), test_session_settings()),
        Arc::new(StubOAuthProvider::new(AuthProvider::Google)),
        Arc::new(StubOAuthProvider::new(AuthProvider::Facebook)),
        ViewRenderer::new().unwrap(),
    );

    TestContext { state, users, sessions }
}
