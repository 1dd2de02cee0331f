//! 세션 인증 미들웨어
//!
//! 세션 쿠키로 로그인 사용자를 복원하고, 복원하지 못하면 로그인 페이지로 보냅니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::session_inner::SessionMiddlewareService;

/// 세션 인증 미들웨어
///
/// 보호가 필요한 리소스나 스코프에만 적용합니다.
///
/// ```rust,ignore
/// web::resource("/secrets")
///     .wrap(SessionMiddleware::required())
///     .route(web::get().to(secrets_page))
/// ```
pub struct SessionMiddleware;

impl SessionMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
