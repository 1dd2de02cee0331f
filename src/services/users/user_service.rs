//! # 사용자 서비스
//!
//! 회원가입, 로그인 자격 증명 검증, OAuth 사용자 find-or-create,
//! 시크릿 추가와 조회를 담당합니다.
//!
//! ## 패스워드 해싱
//!
//! bcrypt cost는 생성 시 주입됩니다. 운영 환경에서는
//! [`PasswordConfig::bcrypt_cost`](crate::config::PasswordConfig::bcrypt_cost)
//! 값을, 테스트에서는 최소 cost(4)를 사용합니다.

use std::sync::Arc;
use validator::Validate;
use crate::{
    domain::{
        dto::users::request::{CredentialsForm, SecretForm},
        entities::users::User,
        models::oauth::OAuthProfile,
    },
    errors::AppError,
    repositories::users::UserStore,
};

/// 로그인 실패 시 공통 메시지 (계정 존재 여부를 노출하지 않음)
const INVALID_CREDENTIALS: &str = "잘못된 사용자명 또는 비밀번호입니다";

pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 로컬 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 빈 사용자명 또는 비밀번호
    /// * `ConflictError` - 이미 존재하는 사용자명
    pub async fn register(&self, form: &CredentialsForm) -> Result<User, AppError> {
        form.validate()?;

        let username = form.normalized_username();

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(&form.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.users
            .create(User::new_local(username.to_string(), password_hash))
            .await?;

        log::info!("새 로컬 사용자 등록: {}", username);

        Ok(user)
    }

    /// 사용자명과 비밀번호를 검증합니다.
    ///
    /// 사용자 없음, OAuth 전용 계정, 비밀번호 불일치는 모두 `AuthenticationError`입니다.
    pub async fn authenticate(&self, form: &CredentialsForm) -> Result<User, AppError> {
        if form.validate().is_err() {
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let user = self.users
            .find_by_username(form.normalized_username())
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        // OAuth 사용자인 경우 비밀번호 인증 불가
        if !user.can_authenticate_with_password() {
            return Err(AppError::AuthenticationError(
                "OAuth 계정입니다. 해당 프로바이더로 로그인해주세요".to_string()
            ));
        }
        let password_hash = user.password_hash.as_deref().unwrap_or_default();

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(&form.password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// 프로바이더 ID로 사용자를 찾고, 없으면 생성합니다.
    ///
    /// 같은 프로바이더 ID로 반복 로그인하면 항상 같은 문서가 반환됩니다.
    /// 이메일이 같은 로컬 계정이 있어도 병합하지 않습니다.
    pub async fn find_or_create_oauth(&self, profile: &OAuthProfile) -> Result<User, AppError> {
        let user = self.users
            .find_or_create_by_provider(
                profile.provider,
                &profile.provider_user_id,
                profile.email.as_deref(),
            )
            .await?;

        log::info!(
            "{} 사용자 로그인: {} ({})",
            profile.provider.as_str(),
            user.id_string().unwrap_or_default(),
            profile.display_name.as_deref().unwrap_or("이름 없음")
        );

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_id(id).await
    }

    /// 사용자의 시크릿 목록에 새 시크릿을 추가합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 비어 있거나 너무 긴 시크릿
    /// * `NotFound` - 사용자 문서가 없음
    pub async fn submit_secret(&self, user_id: &str, form: &SecretForm) -> Result<(), AppError> {
        form.validate()?;

        if !self.users.push_secret(user_id, form.trimmed()).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::debug!("시크릿 추가: user={}", user_id);
        Ok(())
    }

    /// 모든 사용자의 시크릿을 한 목록으로 반환합니다.
    ///
    /// 사용자 순서와 각 사용자 안의 입력 순서를 유지합니다.
    pub async fn all_secrets(&self) -> Result<Vec<String>, AppError> {
        let users = self.users.find_all_with_secrets().await?;

        Ok(users.into_iter().flat_map(|user| user.secrets).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::testing::InMemoryUserStore;

    fn service() -> (UserService, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::default());
        (UserService::new(store.clone(), 4), store)
    }

    fn credentials(username: &str, password: &str) -> CredentialsForm {
        CredentialsForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn secret(text: &str) -> SecretForm {
        SecretForm { secret: text.to_string() }
    }

    #[actix_web::test]
    async fn test_register_hashes_password() {
        let (service, store) = service();

        let user = service.register(&credentials("alice", "hunter2")).await.unwrap();

        assert!(user.id.is_some());
        assert_eq!(user.username.as_deref(), Some("alice"));
        assert!(user.secrets.is_empty());
        let hash = user.password_hash.as_deref().unwrap();
        assert_ne!(hash, "hunter2");
        assert!(bcrypt::verify("hunter2", hash).unwrap());
        assert_eq!(store.count(), 1);
    }

    #[actix_web::test]
    async fn test_register_duplicate_username_conflicts() {
        let (service, store) = service();
        service.register(&credentials("alice", "one")).await.unwrap();

        let result = service.register(&credentials(" alice ", "two")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.count(), 1);
    }

    #[actix_web::test]
    async fn test_register_rejects_blank_fields() {
        let (service, store) = service();

        let result = service.register(&credentials("  ", "pw")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.count(), 0);
    }

    #[actix_web::test]
    async fn test_authenticate() {
        let (service, _) = service();
        let registered = service.register(&credentials("alice", "hunter2")).await.unwrap();

        let user = service.authenticate(&credentials("alice", "hunter2")).await.unwrap();
        assert_eq!(user.id, registered.id);

        let wrong = service.authenticate(&credentials("alice", "nope")).await;
        assert!(matches!(wrong, Err(AppError::AuthenticationError(_))));

        let unknown = service.authenticate(&credentials("bob", "hunter2")).await;
        assert!(matches!(unknown, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_oauth_account_cannot_use_password() {
        let (service, store) = service();
        let mut user = User::new_oauth(AuthProvider::Google, "g-1".to_string(), None);
        user.username = Some("carol".to_string());
        store.create(user).await.unwrap();

        let result = service.authenticate(&credentials("carol", "anything")).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_find_or_create_oauth_is_idempotent() {
        let (service, store) = service();
        let profile = OAuthProfile {
            provider: AuthProvider::Google,
            provider_user_id: "g-42".to_string(),
            email: Some("g@example.com".to_string()),
            display_name: None,
        };

        let first = service.find_or_create_oauth(&profile).await.unwrap();
        let second = service.find_or_create_oauth(&profile).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.email.as_deref(), Some("g@example.com"));
        assert_eq!(store.count(), 1);

        // 같은 ID라도 다른 프로바이더면 별도 계정
        let facebook = OAuthProfile { provider: AuthProvider::Facebook, ..profile };
        let third = service.find_or_create_oauth(&facebook).await.unwrap();
        assert_ne!(first.id, third.id);
        assert_eq!(store.count(), 2);
    }

    #[actix_web::test]
    async fn test_submit_secret_appends_only_to_owner() {
        let (service, store) = service();
        let alice = service.register(&credentials("alice", "pw")).await.unwrap();
        let bob = service.register(&credentials("bob", "pw")).await.unwrap();
        let alice_id = alice.id_string().unwrap();
        let bob_id = bob.id_string().unwrap();

        service.submit_secret(&alice_id, &secret("first")).await.unwrap();
        service.submit_secret(&alice_id, &secret("  second  ")).await.unwrap();

        let alice = store.find_by_id(&alice_id).await.unwrap().unwrap();
        let bob = store.find_by_id(&bob_id).await.unwrap().unwrap();
        assert_eq!(alice.secrets, vec!["first".to_string(), "second".to_string()]);
        assert!(bob.secrets.is_empty());

        let all = service.all_secrets().await.unwrap();
        assert_eq!(all, vec!["first".to_string(), "second".to_string()]);
    }

    #[actix_web::test]
    async fn test_submit_secret_errors() {
        let (service, _) = service();
        let alice = service.register(&credentials("alice", "pw")).await.unwrap();
        let alice_id = alice.id_string().unwrap();

        let blank = service.submit_secret(&alice_id, &secret("   ")).await;
        assert!(matches!(blank, Err(AppError::ValidationError(_))));

        let missing = service
            .submit_secret(&mongodb::bson::oid::ObjectId::new().to_hex(), &secret("hi"))
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
