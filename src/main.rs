//! 시크릿 보드 메인 애플리케이션
//!
//! MongoDB, Redis 연결과 서비스들을 조립하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use secrets_board::caching::redis::RedisClient;
use secrets_board::config::{PasswordConfig, RateLimitConfig, ServerConfig};
use secrets_board::core::AppState;
use secrets_board::db::Database;
use secrets_board::repositories::{sessions::SessionRepository, users::UserRepository};
use secrets_board::routes::configure_all_routes;
use secrets_board::services::{
    auth::{FacebookAuthService, GoogleAuthService, SessionService, SessionSettings},
    users::UserService,
};
use secrets_board::views::ViewRenderer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 시크릿 보드 시작중...");

    let state = match build_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!("애플리케이션 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 저장소 연결과 서비스 조립
///
/// MongoDB 또는 Redis에 연결할 수 없으면 서버를 시작하지 않습니다.
async fn build_app_state() -> Result<AppState, Box<dyn std::error::Error>> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::new().await?;
    info!("✅ MongoDB 연결 성공");

    let redis_client = RedisClient::new().await?;
    info!("✅ Redis 연결 성공");

    let user_repo = UserRepository::new(&database);
    user_repo.create_indexes().await?;

    let http = reqwest::Client::builder()
        .user_agent(concat!("secrets_board/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(AppState::new(
        UserService::new(Arc::new(user_repo), PasswordConfig::bcrypt_cost()),
        SessionService::new(Arc::new(SessionRepository::new(redis_client)), SessionSettings::from_env()),
        Arc::new(GoogleAuthService::from_env(http.clone())),
        Arc::new(FacebookAuthService::from_env(http)),
        ViewRenderer::new()?,
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
