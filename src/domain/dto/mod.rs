//! # Data Transfer Objects
//!
//! API 경계에서 데이터를 주고받기 위한 객체들입니다.
//!
//! ```text
//! dto/
//! └── users/
//!     └── request/   - 폼과 쿼리 파라미터 DTO
//! ```

pub mod users;

pub use users::*;
