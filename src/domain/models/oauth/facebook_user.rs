//! Facebook Graph API `/me` 응답 모델

use serde::Deserialize;

/// Facebook 사용자 정보
///
/// 기본 권한(public_profile)만 요청하므로 `id`와 `name`만 보장됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookUser {
    /// 앱 범위 사용자 ID (`facebookId`로 저장)
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
