//! # 사용자 DTO 모듈
//!
//! 사용자 도메인의 HTTP 입력 타입을 모아둔 모듈입니다.
//! 응답은 서버 렌더링 HTML이므로 별도의 응답 DTO는 두지 않습니다.

pub mod request;

pub use request::*;
