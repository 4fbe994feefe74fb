//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /api/health` → `{ "status": "ok", "database": true, "storage": true }`
//!
//! 데이터베이스 연결이나 사진 저장소 디렉토리 중 하나라도 문제가 있으면
//! `"status": "degraded"`를 반환합니다. 인증 없이 호출할 수 있습니다.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{db, routes::employees::AppState};

/// `GET /health` — 서버 상태를 확인합니다.
///
/// 헬스체크 자체는 실패하지 않습니다. 항상 200을 돌려주고
/// 각 구성 요소의 상태를 본문에 담습니다.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = match db::ping(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Health check: database unavailable: {}", e);
            false
        }
    };
    // metadata가 Err(없음/권한 없음)이면 unwrap_or로 false가 됩니다.
    // 디렉토리가 아니라 파일이 있어도 저장소로는 쓸 수 없으므로 is_dir까지 확인합니다.
    let storage = tokio::fs::metadata(&state.storage_root)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    let status = if database && storage { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "database": database,
        "storage": storage
    }))
}
