//! # 로그인/회원가입 폼 DTO
//!
//! `POST /register`와 `POST /login`이 받는 `application/x-www-form-urlencoded`
//! 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! ### 사용자명 (`username`)
//! - 공백만으로 이루어질 수 없음
//! - 최대 64자
//!
//! ### 비밀번호 (`password`)
//! - 공백만으로 이루어질 수 없음
//! - 최대 72자 (bcrypt 입력 한계)

use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const USERNAME_MAX_CHARS: u64 = 64;
pub const PASSWORD_MAX_CHARS: u64 = 72;

/// 사용자명/비밀번호 폼
///
/// 빠진 필드는 빈 문자열로 채워져 검증 단계에서 거부됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CredentialsForm {
    #[serde(default)]
    #[validate(length(max = USERNAME_MAX_CHARS, message = "사용자명은 64자 이하여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(max = PASSWORD_MAX_CHARS, message = "비밀번호는 72자 이하여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

impl CredentialsForm {
    /// 앞뒤 공백을 제거한 사용자명
    pub fn normalized_username(&self) -> &str {
        self.username.trim()
    }
}

/// 빈 값 또는 공백만 있는 값을 거부
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("값을 입력해주세요".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> CredentialsForm {
        CredentialsForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials() {
        assert!(form("alice", "hunter2").validate().is_ok());
        assert_eq!(form("  alice ", "pw").normalized_username(), "alice");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(form("", "pw").validate().is_err());
        assert!(form("   ", "pw").validate().is_err());
        assert!(form("alice", "").validate().is_err());
    }

    #[test]
    fn test_too_long_fields_rejected() {
        assert!(form(&"a".repeat(65), "pw").validate().is_err());
        assert!(form("alice", &"p".repeat(73)).validate().is_err());
    }

    #[test]
    fn test_missing_field_deserializes_as_blank() {
        let form: CredentialsForm = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();

        assert_eq!(form.password, "");
        assert!(form.validate().is_err());
    }
}
