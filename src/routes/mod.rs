//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `employees`: 직원 사진 조회 핸들러와 공유 상태(AppState)
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod employees;
pub mod health;

// `pub use ...::*`: 하위 모듈의 공개 항목을 `routes::` 경로로 다시 내보냅니다.
// 덕분에 main.rs에서 `routes::AppState`처럼 짧게 쓸 수 있습니다.
pub use employees::*;
pub use health::*;

use axum::{routing::get, Router};

/// API 라우터를 만듭니다. main.rs에서 `/api` 아래에 중첩(nest)됩니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // axum 0.8부터 경로 파라미터는 `{id}` 문법을 사용합니다.
        .route("/employee/{id}/photo", get(get_employee_photo))
        .route("/employee/{id}/status", get(get_employee_status))
        .route("/health", get(health_check))
        // with_state: 모든 핸들러의 `State<AppState>` Extractor에 상태를 공급합니다.
        // 반환 타입이 `Router<()>`가 되어야 main.rs에서 nest할 수 있습니다.
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{test_pool, SqliteEmployeeStore},
        middleware::auth::create_access_token,
        services::{AssetUrlBuilder, LocalDiskStore, PhotoLookup},
        test_support::ErrorCounter,
    };
    use axum::{
        body::{to_bytes, Body},
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use chrono::Duration;
    use serde_json::{json, Value};
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const SECRET: &str = "router-test-secret";

    struct TestApp {
        app: Router,
        pool: SqlitePool,
        dir: TempDir,
    }

    // `dir`(TempDir)은 Drop될 때 디렉토리를 지우므로, 테스트가 끝날 때까지 들고 있어야 합니다.
    async fn test_app() -> TestApp {
        let pool = test_pool().await;
        let dir = TempDir::new().unwrap();
        let photos = PhotoLookup::new(
            Arc::new(SqliteEmployeeStore::new(pool.clone())),
            Arc::new(LocalDiskStore::new(dir.path())),
            AssetUrlBuilder::new("https://meusite-laravel.com.br/storage"),
        );
        let state = AppState {
            pool: pool.clone(),
            photos,
            storage_root: dir.path().to_path_buf(),
            jwt_secret: SECRET.to_string(),
        };
        let app = Router::new().nest("/api", api_router(state));
        TestApp { app, pool, dir }
    }

    fn bearer() -> String {
        let token = create_access_token("facial-api", SECRET, Duration::minutes(5)).unwrap();
        format!("Bearer {}", token)
    }

    async fn send(app: &Router, uri: &str, auth: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(auth) = auth {
            request = request.header(AUTHORIZATION, auth);
        }
        // oneshot: 실제 소켓 없이 Router(Service)에 요청 하나를 보내고 응답을 받습니다.
        // oneshot은 self를 소비하므로 clone한 Router를 넘깁니다. (Router의 clone은 저렴합니다)
        let response = app
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_photo_payload() {
        let t = test_app().await;
        sqlx::query(
            "INSERT INTO employees (id, name, photo_path, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind("123")
        .bind("João Silva")
        .bind("employees/123.jpg")
        .bind("2024-01-15T10:30:00Z")
        .execute(&t.pool)
        .await
        .unwrap();
        std::fs::create_dir_all(t.dir.path().join("employees")).unwrap();
        std::fs::write(t.dir.path().join("employees/123.jpg"), vec![0u8; 245_760]).unwrap();

        let (status, body) = send(&t.app, "/api/employee/123/photo", Some(bearer())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "employee_id": "123",
                "employee_name": "João Silva",
                "photo_url": "https://meusite-laravel.com.br/storage/employees/123.jpg",
                "photo_size": 245760,
                "updated_at": "2024-01-15T10:30:00Z"
            })
        );
    }

    #[tokio::test]
    async fn unknown_employee_is_404() {
        let t = test_app().await;

        let (status, body) = send(&t.app, "/api/employee/999/photo", Some(bearer())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": "employee not found", "employee_id": "999" })
        );
    }

    #[tokio::test]
    async fn missing_file_is_404_with_its_own_reason() {
        let t = test_app().await;
        sqlx::query("INSERT INTO employees (id, name, photo_path) VALUES ('7', 'Ana', 'employees/7.jpg')")
            .execute(&t.pool)
            .await
            .unwrap();

        let (status, body) = send(&t.app, "/api/employee/7/photo", Some(bearer())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": "photo file missing on server", "employee_id": "7" })
        );
    }

    #[tokio::test]
    async fn null_photo_path_is_404_not_registered() {
        let t = test_app().await;
        sqlx::query("INSERT INTO employees (id, name, photo_path) VALUES ('8', 'Bruno', NULL)")
            .execute(&t.pool)
            .await
            .unwrap();

        let (status, body) = send(&t.app, "/api/employee/8/photo", Some(bearer())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": "no photo registered", "employee_id": "8" })
        );
    }

    #[tokio::test]
    async fn status_endpoint_reports_registration() {
        let t = test_app().await;
        sqlx::query("INSERT INTO employees (id, name, photo_path) VALUES ('123', 'João Silva', 'employees/123.jpg')")
            .execute(&t.pool)
            .await
            .unwrap();
        std::fs::create_dir_all(t.dir.path().join("employees")).unwrap();
        std::fs::write(t.dir.path().join("employees/123.jpg"), b"jpeg").unwrap();

        let (status, body) = send(&t.app, "/api/employee/123/status", Some(bearer())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employee_id"], "123");
        assert_eq!(body["has_photo"], true);
        assert_eq!(body["status"], "registered");
        assert!(body["checked_at"].is_string());

        let (status, body) = send(&t.app, "/api/employee/999/status", Some(bearer())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["has_photo"], false);
        assert_eq!(body["status"], "not_registered");

        let (status, _) = send(&t.app, "/api/employee/123/status", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn requests_without_valid_token_are_401() {
        let t = test_app().await;

        let (status, body) = send(&t.app, "/api/employee/123/photo", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Unauthorized" }));

        let (status, body) =
            send(&t.app, "/api/employee/123/photo", Some("Bearer 1|abc123".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Unauthorized" }));

        let (status, _) = send(&t.app, "/api/employee/123/photo", Some("Basic abc".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn store_fault_is_generic_500_logged_once() {
        let t = test_app().await;
        t.pool.close().await;

        let counter = ErrorCounter::default();
        let _guard = counter.install();

        let (status, body) = send(&t.app, "/api/employee/123/photo", Some(bearer())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Erro interno do servidor", "employee_id": "123" })
        );
        assert_eq!(counter.count(), 1);
    }

    #[tokio::test]
    async fn health_reports_components() {
        let t = test_app().await;

        let (status, body) = send(&t.app, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "database": true, "storage": true }));

        t.pool.close().await;
        let (_, body) = send(&t.app, "/api/health", None).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database"], false);
    }
}
