//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증(사용자명/패스워드)과 Google, Facebook OAuth 계정을
//! 하나의 평평한 문서 구조로 표현합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다. 값이 없는 선택 필드는
/// 문서에 저장되지 않으므로 sparse unique 인덱스는 해당 필드를 가진
/// 문서에만 적용됩니다.
///
/// 같은 사람이 로컬 계정과 OAuth 계정을 각각 만들면 서로 다른 문서가 됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로컬 로그인 식별자 (unique)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Google 프로필에서 받은 이메일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// bcrypt 해시 (로컬 계정만 보유)
    #[serde(rename = "password", skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(rename = "googleId", skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(rename = "facebookId", skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// 사용자가 올린 시크릿 목록 (입력 순서 유지)
    #[serde(rename = "secret", default, deserialize_with = "one_or_many")]
    pub secrets: Vec<String>,
}

impl User {
    /// 새 로컬 사용자 생성
    pub fn new_local(username: String, password_hash: String) -> Self {
        Self {
            username: Some(username),
            password_hash: Some(password_hash),
            ..Self::default()
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 프로바이더 ID는 공급자에 맞는 필드에 기록됩니다.
    pub fn new_oauth(provider: AuthProvider, provider_user_id: String, email: Option<String>) -> Self {
        let mut user = Self {
            email,
            ..Self::default()
        };

        match provider {
            AuthProvider::Google => user.google_id = Some(provider_user_id),
            AuthProvider::Facebook => user.facebook_id = Some(provider_user_id),
            AuthProvider::Local => user.username = Some(provider_user_id),
        }

        user
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 계정을 만든 인증 공급자
    ///
    /// 프로바이더 ID가 있으면 해당 OAuth 공급자, 없으면 로컬 계정입니다.
    pub fn auth_provider(&self) -> AuthProvider {
        if self.google_id.is_some() {
            AuthProvider::Google
        } else if self.facebook_id.is_some() {
            AuthProvider::Facebook
        } else {
            AuthProvider::Local
        }
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// 주어진 공급자에서의 사용자 ID
    pub fn provider_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Local => None,
            AuthProvider::Google => self.google_id.as_deref(),
            AuthProvider::Facebook => self.facebook_id.as_deref(),
        }
    }
}

/// `secret` 필드를 배열로 읽습니다.
///
/// 단일 문자열로 저장된 문서와 `null` 값도 허용합니다.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(secret)) => vec![secret],
        Some(OneOrMany::Many(secrets)) => secrets,
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_local_user_document_shape() {
        let user = User::new_local("alice".to_string(), "$2b$04$hash".to_string());
        let document = bson::to_document(&user).unwrap();

        assert_eq!(document.get_str("username").unwrap(), "alice");
        assert_eq!(document.get_str("password").unwrap(), "$2b$04$hash");
        assert!(document.get_array("secret").unwrap().is_empty());
        // 값이 없는 선택 필드는 저장하지 않음
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("googleId"));
        assert!(!document.contains_key("facebookId"));
        assert!(!document.contains_key("email"));
    }

    #[test]
    fn test_oauth_user_fields() {
        let google = User::new_oauth(AuthProvider::Google, "g-1".to_string(), Some("a@b.c".to_string()));
        assert_eq!(google.google_id.as_deref(), Some("g-1"));
        assert_eq!(google.auth_provider(), AuthProvider::Google);
        assert_eq!(google.provider_id(AuthProvider::Google), Some("g-1"));
        assert!(!google.can_authenticate_with_password());

        let facebook = User::new_oauth(AuthProvider::Facebook, "f-1".to_string(), None);
        assert_eq!(facebook.facebook_id.as_deref(), Some("f-1"));
        assert_eq!(facebook.auth_provider(), AuthProvider::Facebook);
        assert_eq!(facebook.provider_id(AuthProvider::Google), None);
    }

    #[test]
    fn test_secret_field_variants() {
        let single: User = bson::from_document(doc! { "username": "bob", "secret": "only one" }).unwrap();
        assert_eq!(single.secrets, vec!["only one".to_string()]);

        let missing: User = bson::from_document(doc! { "username": "bob" }).unwrap();
        assert!(missing.secrets.is_empty());

        let null: User = bson::from_document(doc! { "username": "bob", "secret": null }).unwrap();
        assert!(null.secrets.is_empty());

        let many: User = bson::from_document(doc! { "secret": ["a", "b"] }).unwrap();
        assert_eq!(many.secrets, vec!["a".to_string(), "b".to_string()]);
    }
}
