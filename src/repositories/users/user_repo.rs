//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **원자적 find-or-create**: `findOneAndUpdate` + `upsert`
//! - **원자적 시크릿 추가**: `$push`
//! - **데이터 무결성**: sparse unique 인덱스와 중복 키(11000) 처리

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::config::AuthProvider;
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use super::user_store::UserStore;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 오류 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB `users` 컬렉션 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 사용자 컬렉션 인덱스를 생성합니다.
    ///
    /// 선택 필드는 값이 없으면 저장되지 않으므로 모두 sparse로 만듭니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let unique_sparse = |field: &str| {
            let mut keys = Document::new();
            keys.insert(field, 1);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(format!("{}_unique", field))
                    .build())
                .build()
        };

        self.collection
            .create_indexes([
                unique_sparse("username"),
                unique_sparse("googleId"),
                unique_sparse("facebookId"),
            ])
            .await?;

        Ok(())
    }

    fn parse_id(id: &str) -> Option<ObjectId> {
        ObjectId::parse_str(id).ok()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Some(object_id) = Self::parse_id(id) else {
            debug!("유효하지 않은 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        Ok(self.collection.find_one(doc! { "_id": object_id }).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection.find_one(doc! { "username": username }).await?)
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if let Some(username) = user.username.as_deref() {
            if self.find_by_username(username).await?.is_some() {
                return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
            }
        }

        let result = match self.collection.insert_one(&user).await {
            Ok(result) => result,
            // 확인과 삽입 사이에 같은 사용자명이 생성된 경우
            Err(e) if is_duplicate_key(&e) => {
                return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_or_create_by_provider(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
        email: Option<&str>,
    ) -> Result<User, AppError> {
        let field = provider.id_field()
            .ok_or_else(|| AppError::ValidationError("로컬 계정은 프로바이더 ID가 없습니다".to_string()))?;

        let mut filter = Document::new();
        filter.insert(field, provider_user_id);

        let mut on_insert = Document::new();
        on_insert.insert("secret", Bson::Array(Vec::new()));
        if let Some(email) = email {
            on_insert.insert("email", email);
        }

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let result = self.collection
            .find_one_and_update(filter.clone(), doc! { "$setOnInsert": on_insert })
            .with_options(options)
            .await;

        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::InternalError("upsert 결과 문서가 없습니다".to_string())),
            // 동시에 두 upsert가 삽입을 시도하면 한쪽은 중복 키로 실패하므로 다시 조회
            Err(e) if is_duplicate_key(&e) => {
                warn!("{} 사용자 동시 생성 감지, 기존 문서를 조회합니다", provider.as_str());
                self.collection
                    .find_one(filter)
                    .await?
                    .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn push_secret(&self, id: &str, secret: &str) -> Result<bool, AppError> {
        let Some(object_id) = Self::parse_id(id) else {
            return Ok(false);
        };

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$push": { "secret": secret } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn find_all_with_secrets(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection
            .find(doc! { "secret": { "$ne": Bson::Null } })
            .await?;

        Ok(cursor.try_collect::<Vec<User>>().await?)
    }
}

/// 중복 키(E11000) 오류인지 확인
///
/// `insertOne`은 쓰기 오류로, `findAndModify`는 명령 오류로 보고됩니다.
fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use mongodb::error::{CommandError, WriteError};

    fn server_error(code: i32) -> Document {
        doc! { "code": code, "codeName": "DuplicateKey", "errmsg": "E11000 duplicate key error" }
    }

    #[test]
    fn test_duplicate_key_from_insert() {
        let write_error: WriteError = bson::from_document(server_error(DUPLICATE_KEY_CODE)).unwrap();
        let error = MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)));

        assert!(is_duplicate_key(&error));
    }

    #[test]
    fn test_duplicate_key_from_find_and_modify() {
        let command_error: CommandError = bson::from_document(server_error(DUPLICATE_KEY_CODE)).unwrap();
        let error = MongoError::from(ErrorKind::Command(command_error));

        assert!(is_duplicate_key(&error));
    }

    #[test]
    fn test_other_errors_are_not_duplicate_key() {
        let command_error: CommandError = bson::from_document(server_error(121)).unwrap();
        assert!(!is_duplicate_key(&MongoError::from(ErrorKind::Command(command_error))));

        let write_error: WriteError = bson::from_document(server_error(2)).unwrap();
        assert!(!is_duplicate_key(&MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))));
    }

    /// 로컬 MongoDB가 필요합니다: `cargo test -- --ignored`
    #[actix_web::test]
    #[ignore]
    async fn test_find_or_create_against_mongodb() {
        let database = Database::new().await.unwrap();
        let repo = UserRepository::new(&database);
        repo.create_indexes().await.unwrap();

        let provider_id = ObjectId::new().to_hex();
        // 같은 프로바이더 ID로 동시에 upsert
        let (first, second) = futures_util::future::join(
            repo.find_or_create_by_provider(AuthProvider::Google, &provider_id, Some("a@example.com")),
            repo.find_or_create_by_provider(AuthProvider::Google, &provider_id, None),
        ).await;

        let first = first.unwrap();
        let second = second.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.google_id.as_deref(), Some(provider_id.as_str()));
    }
}
