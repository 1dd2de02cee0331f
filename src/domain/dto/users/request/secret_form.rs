//! 시크릿 제출 폼 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 시크릿 최대 길이 (문자 수, 앞뒤 공백 제외)
pub const SECRET_MAX_CHARS: usize = 500;

/// `POST /submit` 폼
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SecretForm {
    #[serde(default)]
    #[validate(custom(function = "validate_secret"))]
    pub secret: String,
}

impl SecretForm {
    /// 저장할 값 (앞뒤 공백 제거)
    pub fn trimmed(&self) -> &str {
        self.secret.trim()
    }
}

/// 공백을 제외하고 1자 이상 [`SECRET_MAX_CHARS`]자 이하인지 검증
fn validate_secret(secret: &str) -> Result<(), ValidationError> {
    let length = secret.trim().chars().count();

    if length == 0 {
        return Err(ValidationError::new("blank")
            .with_message("시크릿을 입력해주세요".into()));
    }
    if length > SECRET_MAX_CHARS {
        return Err(ValidationError::new("too_long")
            .with_message(format!("시크릿은 {}자 이하여야 합니다", SECRET_MAX_CHARS).into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(secret: &str) -> SecretForm {
        SecretForm { secret: secret.to_string() }
    }

    #[test]
    fn test_secret_length_bounds() {
        assert!(form("I like pineapple pizza").validate().is_ok());
        assert!(form(&"x".repeat(SECRET_MAX_CHARS)).validate().is_ok());
        assert!(form(&"x".repeat(SECRET_MAX_CHARS + 1)).validate().is_err());
        assert!(form("").validate().is_err());
        assert!(form(" \n\t ").validate().is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 한글 500자는 1500바이트지만 허용
        assert!(form(&"비".repeat(SECRET_MAX_CHARS)).validate().is_ok());
    }

    #[test]
    fn test_trimmed_value() {
        assert_eq!(form("  hello  ").trimmed(), "hello");
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let form: SecretForm = serde_json::from_str("{}").unwrap();

        assert!(form.validate().is_err());
    }
}
