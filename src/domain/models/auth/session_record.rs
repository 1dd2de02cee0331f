//! Redis에 저장되는 로그인 세션 레코드

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 로그인 세션
///
/// 쿠키로 전달되는 원본 세션 ID가 아니라 그 SHA-256 해시를 키로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// 로그인한 사용자 ID (ObjectId hex)
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            created_at: Utc::now(),
        }
    }
}
