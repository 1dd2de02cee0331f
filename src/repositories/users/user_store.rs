//! 사용자 저장소 추상화

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 사용자 문서 저장소
///
/// 운영 환경에서는 MongoDB 기반 [`UserRepository`](super::user_repo::UserRepository)가,
/// 테스트에서는 메모리 구현체가 사용됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ObjectId hex 문자열로 조회합니다. 형식이 잘못된 ID는 `None`입니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 `_id`가 채워진 문서를 반환합니다.
    ///
    /// 사용자명이 이미 존재하면 `ConflictError`.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 프로바이더 ID로 사용자를 찾고, 없으면 원자적으로 생성합니다.
    ///
    /// `email`은 새 문서를 만들 때만 기록됩니다.
    async fn find_or_create_by_provider(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
        email: Option<&str>,
    ) -> Result<User, AppError>;

    /// 사용자의 시크릿 목록 끝에 추가합니다. 대상이 없으면 `false`.
    async fn push_secret(&self, id: &str, secret: &str) -> Result<bool, AppError>;

    /// `secret` 필드를 가진 모든 사용자
    async fn find_all_with_secrets(&self) -> Result<Vec<User>, AppError>;
}
