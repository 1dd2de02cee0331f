//! Redis 저장소 계층 모듈
//!
//! 로그인 세션과 OAuth state 값을 보관하는 Redis 클라이언트를 제공합니다.
//!
//! # 주요 기능
//!
//! - 멀티플렉싱 비동기 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원과 원자적 읽기-삭제(`GETDEL`)
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
