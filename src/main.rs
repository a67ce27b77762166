//! 인증 토큰 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 서명 설정이 유효하지 않거나 저장소에 연결할 수 없으면 트래픽을 받지 않고 종료합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use auth_token_service::caching::redis::RedisClient;
use auth_token_service::config::{
    CookieConfig, DatabaseConfig, Environment, JwtSettings, RedisConfig, ServerConfig,
};
use auth_token_service::core::ServiceRegistry;
use auth_token_service::db::Database;
use auth_token_service::repositories::sessions::RedisSessionStore;
use auth_token_service::repositories::users::MongoUserRepository;
use auth_token_service::routes::configure_all_routes;
use auth_token_service::services::auth::BcryptPasswordHasher;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 인증 토큰 서비스 시작중... (환경: {:?})", Environment::current());

    // 서명 설정은 시작 시 한 번만 검증
    let jwt_settings = JwtSettings::from_env().map_err(|e| {
        error!("JWT 설정 오류: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("JWT 설정 로드됨: {:?}", jwt_settings);

    let registry = initialize_services(&jwt_settings).await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registry).await
}

/// 저장소에 연결하고 서비스 그래프를 조립합니다.
async fn initialize_services(jwt_settings: &JwtSettings) -> std::io::Result<ServiceRegistry> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&DatabaseConfig::uri(), &DatabaseConfig::name())
        .await
        .map_err(|e| startup_error("MongoDB 연결 실패", e))?;

    let user_repository = MongoUserRepository::new(&database);
    user_repository
        .ensure_indexes()
        .await
        .map_err(|e| startup_error("사용자 인덱스 생성 실패", e))?;

    let redis_client = RedisClient::new(&RedisConfig::url())
        .await
        .map_err(|e| startup_error("Redis 연결 실패", e))?;

    Ok(ServiceRegistry::new(
        jwt_settings,
        CookieConfig::from_env(),
        Arc::new(user_repository),
        Arc::new(RedisSessionStore::new(redis_client)),
        Arc::new(BcryptPasswordHasher::from_env()),
    ))
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, e);
    std::io::Error::other(format!("{}: {}", context, e))
}

/// HTTP 서버 시작
///
/// 미들웨어 적용 순서 (바깥쪽부터):
/// 1. Rate Limiting (Governor)
/// 2. CORS
/// 3. 요청 로깅
/// 4. 경로 정규화 (끝의 `/` 제거)
async fn start_http_server(registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/v1/check", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| startup_error("Rate Limiting 설정 실패", "per_second/burst_size must be positive"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();
        let registry = registry.clone();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| registry.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// `PROFILE` 값(`prod` / `dev`, 기본 `dev`)에 맞는 환경 파일을 로드합니다.
///
/// 알 수 없는 프로필이면 `.env`를 사용합니다. 파일이 없어도 프로세스 환경 변수만으로 동작합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    // 로거 초기화 전이므로 stderr 로 출력
    if let Err(e) = dotenv::from_filename(filename) {
        eprintln!("{} 파일 로드 실패: {}", filename, e);
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정
///
/// 토큰이 쿠키로 전달되므로 `supports_credentials()`가 필요하며,
/// 이 경우 와일드카드 origin 은 사용할 수 없습니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// 환경 변수에서 Rate Limiting 설정을 로드합니다.
///
/// - `RATE_LIMIT_PER_SECOND` (기본값: 100)
/// - `RATE_LIMIT_BURST_SIZE` (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let config = RateLimitConfig {
        per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
        burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

fn env_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        Err(_) => default,
    }
}
