//! OAuth 콜백 쿼리 파라미터

use serde::Deserialize;

/// 프로바이더가 콜백 URL로 돌려보내는 쿼리 파라미터
///
/// 성공 시 `code`와 `state`가, 사용자가 동의를 거부하면 `error`가 전달됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl OAuthCallbackQuery {
    /// 프로바이더가 보고한 오류 메시지
    pub fn provider_error(&self) -> Option<String> {
        self.error.as_ref().map(|error| match &self.error_description {
            Some(description) => format!("{}: {}", error, description),
            None => error.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_message() {
        let denied = OAuthCallbackQuery {
            error: Some("access_denied".to_string()),
            error_description: Some("Permissions error".to_string()),
            ..Default::default()
        };
        assert_eq!(denied.provider_error().as_deref(), Some("access_denied: Permissions error"));

        let ok = OAuthCallbackQuery {
            code: Some("c".to_string()),
            state: Some("s".to_string()),
            ..Default::default()
        };
        assert!(ok.provider_error().is_none());
    }
}
