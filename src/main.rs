//! # 직원 사진 조회 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. 사진 저장소 디렉토리 확인
//! 6. API 라우터 설정
//! 7. HTTP 서버 시작
//!
//! `employee-photos issue-token <subject> [days]`로 실행하면 서버 대신
//! 같은 JWT_SECRET으로 서명한 Bearer 토큰을 발급해 출력하고 종료합니다.

mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod services;
#[cfg(test)]
mod test_support;

use std::{path::Path, sync::Arc};

use anyhow::{bail, Context, Result};
use axum::Router;
use config::Config;
use routes::AppState;
use services::{AssetUrlBuilder, LocalDiskStore, PhotoLookup};
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_photos=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 하위 명령은 서버 설정 전체가 필요 없으므로 Config보다 먼저 처리합니다.
    // (토큰 발급에는 DATABASE_URL이 없어도 됩니다)
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(command) = args.first() {
        return match command.as_str() {
            "issue-token" => {
                let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
                issue_token(&secret, &args[1..])
            }
            other => bail!("Unknown command: {} (expected: issue-token <subject> [days])", other),
        };
    }

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env().context("DATABASE_URL and JWT_SECRET must be set")?;

    tracing::info!("Starting employee photo server on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성 ──
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 사진 저장소 디렉토리 확인 ──
    // 디렉토리가 없으면 만들어 둡니다. (사진이 하나도 없어도 서버는 동작해야 합니다)
    let storage_root = Path::new(&config.storage_root);
    if !storage_root.exists() {
        tokio::fs::create_dir_all(storage_root).await?;
        tracing::info!("Created storage directory: {}", config.storage_root);
    }

    // ── 7단계: 애플리케이션 상태(State) 생성 ──
    // 협력자(저장소, 파일 저장소, URL 생성기)를 여기서 한 번 만들어 주입합니다.
    let photos = PhotoLookup::new(
        Arc::new(db::SqliteEmployeeStore::new(pool.clone())),
        Arc::new(LocalDiskStore::new(storage_root)),
        AssetUrlBuilder::new(config.asset_base_url.clone()),
    );
    let state = AppState {
        pool: pool.clone(),
        photos,
        storage_root: storage_root.to_path_buf(),
        jwt_secret: config.jwt_secret.clone(),
    };

    // ── 8단계: 라우터 설정 ──
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().nest("/api", routes::api_router(state));

    // 이 서버가 사진 파일의 공개 호스트 역할도 할 때: /storage/employees/123.jpg
    if config.serve_storage {
        tracing::info!("Serving photo files from {} at /storage", config.storage_root);
        app = app.nest_service("/storage", ServeDir::new(&config.storage_root));
    } else {
        tracing::info!("Photo files are served externally from {}", config.asset_base_url);
    }

    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    // ── 9단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// `issue-token <subject> [days]` — Bearer 토큰을 발급해 표준 출력으로 내보냅니다.
///
/// 사진 API를 호출할 클라이언트(예: 얼굴 인식 서비스)에 전달할 토큰을 만들 때 사용합니다.
fn issue_token(secret: &str, args: &[String]) -> Result<()> {
    let subject = args
        .first()
        .context("usage: issue-token <subject> [days]")?;
    // Option<&String> → Option<&str>
    let ttl = token_ttl(args.get(1).map(String::as_str))?;

    let token = middleware::auth::create_access_token(subject, secret, ttl)?;
    tracing::info!("Issued token for {} valid for {} days", subject, ttl.num_days());
    println!("{}", token);

    Ok(())
}

/// 토큰 유효 기간(일)을 해석합니다. 인자가 없으면 30일입니다.
///
/// 0 이하는 이미 만료된 토큰이 되므로 거부합니다.
fn token_ttl(days: Option<&str>) -> Result<chrono::Duration> {
    let days: i64 = match days {
        Some(days) => days.parse().context("days must be an integer")?,
        None => 30,
    };
    if days <= 0 {
        bail!("days must be positive, got {}", days);
    }
    let ttl = chrono::Duration::try_days(days).context("days is out of range")?;
    // 만료 시각 계산(`now + ttl`)도 날짜 범위를 넘으면 panic하므로 미리 확인합니다.
    chrono::Utc::now()
        .checked_add_signed(ttl)
        .context("days is out of range")?;
    Ok(ttl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_ttl_defaults_to_thirty_days() {
        assert_eq!(token_ttl(None).unwrap(), chrono::Duration::days(30));
        assert_eq!(token_ttl(Some("7")).unwrap(), chrono::Duration::days(7));
    }

    #[test]
    fn token_ttl_rejects_non_positive_days() {
        assert!(token_ttl(Some("0")).is_err());
        assert!(token_ttl(Some("-5")).is_err());
        assert!(token_ttl(Some("soon")).is_err());
    }

    #[test]
    fn token_ttl_rejects_days_beyond_range() {
        assert!(token_ttl(Some("9223372036854775807")).is_err());
        // Duration으로는 표현되지만 만료 시각이 날짜 범위를 넘는 값
        assert!(token_ttl(Some("1000000000")).is_err());
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        // issue_token은 표준 출력으로만 내보내므로, 같은 경로로 만든 토큰을 검증합니다.
        let ttl = token_ttl(Some("1")).unwrap();
        let token = middleware::auth::create_access_token("facial-service", "s3cret", ttl).unwrap();
        let claims = middleware::auth::verify_access_token(&token, "s3cret").unwrap();
        assert_eq!(claims.sub, "facial-service");
        assert!(issue_token("s3cret", &[]).is_err());
    }
}
