//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 계층의 에러를
//! 하나의 타입으로 통합합니다. 이 서비스는 브라우저가 직접 사용하는
//! 서버 렌더링 웹 애플리케이션이므로, 인증 실패는 JSON 에러 대신
//! 로그인 페이지로의 리다이렉트로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | 응답 |
//! |----------|------|
//! | `AuthenticationError` | 302 Found → `/login` |
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | 나머지 | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn submit(secret: &str) -> Result<(), AppError> {
//!     if secret.trim().is_empty() {
//!         return Err(AppError::ValidationError("비밀 내용이 비어 있습니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

/// 인증이 필요한 요청이 실패했을 때 이동하는 경로
pub const LOGIN_PATH: &str = "/login";

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 세션 저장소 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (302 → /login)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러, 주로 OAuth 프로바이더 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 템플릿 렌더링 에러 (500 Internal Server Error)
    #[error("Template error: {0}")]
    TemplateError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        AppError::TemplateError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::ExternalServiceError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationError(_) => StatusCode::FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인증 실패는 로그인 페이지로 리다이렉트하고, 나머지는 상태 코드와
    /// 짧은 HTML 메시지로 응답합니다. 5xx 에러의 상세 내용은 로그에만 남깁니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if let AppError::AuthenticationError(reason) = self {
            log::debug!("인증 실패로 로그인 페이지로 이동: {}", reason);
            return HttpResponse::Found()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish();
        }

        let message = if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
            "Something went wrong. Please try again later.".to_string()
        } else {
            self.to_string()
        };

        let body = crate::views::render_error_page(status.as_u16(), &message)
            .unwrap_or_else(|e| {
                log::error!("에러 페이지 렌더링 실패: {}", e);
                status.to_string()
            });

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}
