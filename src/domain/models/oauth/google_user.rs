//! # Google OAuth 사용자 정보 모델
//!
//! OpenID Connect userinfo 엔드포인트(`/oauth2/v3/userinfo`)의 응답을
//! 역직렬화합니다. 이전 v2 엔드포인트의 `id` 필드도 허용합니다.

use serde::Deserialize;

/// Google userinfo 응답
///
/// ## OAuth 2.0 스코프 요구사항
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `sub` | 항상 제공 |
/// | `email`, `email_verified` | `email` |
/// | `name` | `profile` |
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 식별자
    ///
    /// 한 번 할당되면 바뀌지 않으므로 `googleId`로 저장합니다.
    #[serde(alias = "id")]
    pub sub: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, alias = "verified_email")]
    pub email_verified: Option<bool>,

    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v3_userinfo() {
        let json = r#"{
            "sub": "110169484474386276334",
            "name": "Jane Doe",
            "picture": "https://lh3.googleusercontent.com/a/photo",
            "email": "jane@example.com",
            "email_verified": true
        }"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.sub, "110169484474386276334");
        assert_eq!(info.email.as_deref(), Some("jane@example.com"));
        assert_eq!(info.email_verified, Some(true));
    }

    #[test]
    fn test_parse_v2_userinfo_without_email() {
        let json = r#"{"id": "42", "name": "No Email", "verified_email": false}"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.sub, "42");
        assert!(info.email.is_none());
        assert_eq!(info.email_verified, Some(false));
    }
}
