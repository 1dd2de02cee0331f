//! OAuth 토큰 교환 응답 모델

use serde::Deserialize;

/// Authorization Code 교환 결과
///
/// Google과 Facebook 모두 `access_token`은 공통으로 반환하며,
/// 나머지 필드는 프로바이더마다 다르므로 선택 필드로 둡니다.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
    /// Google이 OpenID 스코프 요청 시 함께 돌려주는 ID 토큰 (검증하지 않음)
    #[serde(default)]
    pub id_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_google_token_response() {
        let json = r#"{
            "access_token": "ya29.a0Af",
            "expires_in": 3599,
            "scope": "openid https://www.googleapis.com/auth/userinfo.email",
            "token_type": "Bearer",
            "id_token": "eyJhbGciOi"
        }"#;
        let token: OAuthTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "ya29.a0Af");
        assert_eq!(token.expires_in, Some(3599));
    }

    #[test]
    fn test_parse_facebook_token_response() {
        let json = r#"{"access_token":"EAAB","token_type":"bearer","expires_in":5183944}"#;
        let token: OAuthTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "EAAB");
        assert!(token.scope.is_none());
        assert!(token.id_token.is_none());
    }
}
