//! # View Renderer
//!
//! 서버 렌더링 HTML 페이지를 만드는 `minijinja` 환경입니다.
//! 템플릿은 컴파일 시점에 바이너리에 포함되므로 실행 위치와 무관하게 동작합니다.
//!
//! `.html` 템플릿은 출력 시 자동으로 HTML 이스케이프되므로 사용자가 입력한
//! 시크릿이 마크업으로 해석되지 않습니다.
//!
//! ## 템플릿 구성
//!
//! ```text
//! templates/
//! ├── partials/
//! │   ├── header.html   - <head>, Bootstrap, 스타일시트
//! │   ├── footer.html
//! │   └── social.html   - Google/Facebook 로그인 버튼
//! ├── home.html
//! ├── login.html
//! ├── register.html
//! ├── submit.html       - context: secret_max
//! ├── secrets.html      - context: secrets
//! └── error.html        - context: status, message (단독 환경)
//! ```

use actix_web::HttpResponse;
use minijinja::Environment;
use serde::Serialize;
use crate::errors::AppError;

pub const HOME: &str = "home.html";
pub const LOGIN: &str = "login.html";
pub const REGISTER: &str = "register.html";
pub const SUBMIT: &str = "submit.html";
pub const SECRETS: &str = "secrets.html";
pub const ERROR: &str = "error.html";

/// 공개 스타일시트 (`GET /css/styles.css`)
pub const STYLESHEET: &str = include_str!("../../public/css/styles.css");

const TEMPLATES: &[(&str, &str)] = &[
    ("partials/header.html", include_str!("../../templates/partials/header.html")),
    ("partials/footer.html", include_str!("../../templates/partials/footer.html")),
    ("partials/social.html", include_str!("../../templates/partials/social.html")),
    (HOME, include_str!("../../templates/home.html")),
    (LOGIN, include_str!("../../templates/login.html")),
    (REGISTER, include_str!("../../templates/register.html")),
    (SUBMIT, include_str!("../../templates/submit.html")),
    (SECRETS, include_str!("../../templates/secrets.html")),
];

const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// 에러 응답 본문을 렌더링합니다.
///
/// `ResponseError`에서는 앱 상태에 접근할 수 없으므로 에러 템플릿만 가진 환경을 따로 만듭니다.
pub fn render_error_page(status: u16, message: &str) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(ERROR, ERROR_TEMPLATE)?;
    env.get_template(ERROR)?.render(minijinja::context! { status, message })
}

pub struct ViewRenderer {
    env: Environment<'static>,
}

impl ViewRenderer {
    /// 모든 템플릿을 등록합니다. 문법 오류가 있으면 시작 시점에 실패합니다.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }

    /// 템플릿을 렌더링하여 `200 OK` HTML 응답으로 만듭니다.
    pub fn page<S: Serialize>(&self, name: &str, ctx: S) -> Result<HttpResponse, AppError> {
        let body = self.render(name, ctx)?;

        Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body))
    }
}
