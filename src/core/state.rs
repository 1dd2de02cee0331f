//! # 애플리케이션 상태
//!
//! `main`에서 조립한 서비스 핸들을 모아 `web::Data<AppState>`로 공유합니다.
//! 모든 필드는 불변 `Arc` 핸들이므로 워커 간 복제 비용이 작습니다.
//!
//! ```text
//! AppState
//! ├── users     ─ UserService    ─ dyn UserStore    (MongoDB)
//! ├── sessions  ─ SessionService ─ dyn SessionStore (Redis)
//! ├── google    ─ dyn OAuthProvider
//! ├── facebook  ─ dyn OAuthProvider
//! └── views     ─ ViewRenderer   (minijinja)
//! ```
//!
//! 테스트에서는 저장소와 프로바이더를 메모리 구현체로 바꿔 끼웁니다.

use std::sync::Arc;
use crate::{
    config::AuthProvider,
    errors::AppError,
    services::{
        auth::{OAuthProvider, SessionService},
        users::UserService,
    },
    views::ViewRenderer,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub sessions: Arc<SessionService>,
    pub google: Arc<dyn OAuthProvider>,
    pub facebook: Arc<dyn OAuthProvider>,
    pub views: Arc<ViewRenderer>,
}

impl AppState {
    pub fn new(
        users: UserService,
        sessions: SessionService,
        google: Arc<dyn OAuthProvider>,
        facebook: Arc<dyn OAuthProvider>,
        views: ViewRenderer,
    ) -> Self {
        Self {
            users: Arc::new(users),
            sessions: Arc::new(sessions),
            google,
            facebook,
            views: Arc::new(views),
        }
    }

    /// 공급자에 해당하는 OAuth 프로바이더
    pub fn oauth_provider(&self, provider: AuthProvider) -> Result<&dyn OAuthProvider, AppError> {
        match provider {
            AuthProvider::Google => Ok(self.google.as_ref()),
            AuthProvider::Facebook => Ok(self.facebook.as_ref()),
            AuthProvider::Local => Err(AppError::ValidationError(
                "로컬 계정은 OAuth 프로바이더가 없습니다".to_string()
            )),
        }
    }
}
