use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 세션에서 복원된 사용자 정보
///
/// 세션 미들웨어가 요청 extensions에 넣고, 보호된 핸들러가 추출자로 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId hex)
    pub user_id: String,

    /// 로컬 계정의 사용자명
    pub username: Option<String>,

    /// 계정을 만든 인증 공급자
    pub auth_provider: AuthProvider,
}

impl AuthenticatedUser {
    /// 저장된 사용자 문서에서 생성합니다. `_id`가 없으면 `None`.
    pub fn from_user(user: &User) -> Option<Self> {
        Some(Self {
            user_id: user.id_string()?,
            username: user.username.clone(),
            auth_provider: user.auth_provider(),
        })
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 세션 미들웨어를 거치지 않은 요청에서는 로그인 페이지로 리다이렉트됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}
