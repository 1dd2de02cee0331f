//! SessionMiddleware 인증 로직의 핵심적인 기능

use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppState;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, LOGIN_PATH};

/// 실제 인증 로직을 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let state = req.app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| AppError::InternalError("AppState가 등록되지 않았습니다".to_string()))?;

            match restore_user(&req, &state).await? {
                Some(user) => {
                    log::debug!("세션 인증 성공: 사용자 ID {}", user.user_id);
                    // 사용자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(user);
                }
                None => {
                    log::debug!("세션 없음, 로그인 페이지로 이동: {}", req.path());
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, LOGIN_PATH))
                        .finish();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 세션 쿠키에서 사용자를 복원합니다.
///
/// 쿠키, 세션 레코드, 사용자 문서 중 하나라도 없으면 `None`입니다.
async fn restore_user(
    req: &ServiceRequest,
    state: &AppState,
) -> Result<Option<AuthenticatedUser>, AppError> {
    let Some(cookie) = req.cookie(state.sessions.cookie_name()) else {
        return Ok(None);
    };

    let Some(record) = state.sessions.restore(cookie.value()).await? else {
        return Ok(None);
    };

    let user = state.users.find_by_id(&record.user_id).await?;

    if user.is_none() {
        log::warn!("세션의 사용자가 존재하지 않습니다: {}", record.user_id);
    }

    Ok(user.as_ref().and_then(AuthenticatedUser::from_user))
}
