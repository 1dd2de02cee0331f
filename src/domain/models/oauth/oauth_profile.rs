//! 프로바이더 공통 사용자 프로필

use crate::config::AuthProvider;
use super::facebook_user::FacebookUser;
use super::google_user::GoogleUserInfo;

/// 프로바이더별 응답을 정규화한 프로필
///
/// find-or-create는 `provider`와 `provider_user_id`만으로 사용자를 식별합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthProfile {
    pub provider: AuthProvider,
    pub provider_user_id: String,
    /// 새 사용자 생성 시 기록할 이메일
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl From<GoogleUserInfo> for OAuthProfile {
    fn from(info: GoogleUserInfo) -> Self {
        Self {
            provider: AuthProvider::Google,
            provider_user_id: info.sub,
            email: info.email,
            display_name: info.name,
        }
    }
}

impl From<FacebookUser> for OAuthProfile {
    /// Facebook 이메일은 저장하지 않습니다.
    fn from(user: FacebookUser) -> Self {
        Self {
            provider: AuthProvider::Facebook,
            provider_user_id: user.id,
            email: None,
            display_name: user.name,
        }
    }
}
