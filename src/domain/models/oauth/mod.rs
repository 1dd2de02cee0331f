//! # OAuth 통합 모델
//!
//! 외부 OAuth 프로바이더(Google, Facebook)와 주고받는 데이터 모델입니다.
//!
//! ```text
//! oauth/
//! ├── token_response.rs  - 토큰 교환 응답 (공통)
//! ├── google_user.rs     - Google userinfo 응답
//! ├── facebook_user.rs   - Facebook Graph `/me` 응답
//! └── oauth_profile.rs   - 프로바이더 공통 프로필
//! ```
//!
//! 프로바이더 응답은 [`OAuthProfile`]로 변환된 뒤 사용자 서비스에 전달됩니다.

pub mod token_response;
pub mod google_user;
pub mod facebook_user;
pub mod oauth_profile;

pub use token_response::OAuthTokenResponse;
pub use google_user::GoogleUserInfo;
pub use facebook_user::FacebookUser;
pub use oauth_profile::OAuthProfile;
