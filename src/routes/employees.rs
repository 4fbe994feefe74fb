//! # 직원(Employee) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/employee/{id}/photo` → 직원 사진 메타데이터 조회 (Bearer 토큰 필요)
//! - `GET /api/employee/{id}/status` → 사진 등록 여부만 확인 (Bearer 토큰 필요)
//!
//! 사진 조회 응답은 네 가지 중 하나입니다:
//! - 200: `{ "success": true, "employee_id", "employee_name", "photo_url", "photo_size", "updated_at" }`
//! - 404: `{ "error": "<사유>", "employee_id" }` (사유 3종)
//! - 401: `{ "error": "Unauthorized" }` (AuthUser Extractor가 거부)
//! - 500: `{ "error": "Erro interno do servidor", "employee_id" }`

use std::path::PathBuf;

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use crate::{
    error::PhotoError,
    middleware::auth::AuthUser,
    models::{EmployeePhoto, PhotoStatus},
    services::PhotoLookup,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum은 요청마다 상태를 clone하므로 `Clone`이 필요합니다.
/// (SqlitePool과 PhotoLookup 내부는 Arc라서 clone 비용이 작습니다)
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (헬스체크용)
    pub pool: SqlitePool,
    /// 사진 조회 서비스 (저장소 협력자들이 주입된 상태)
    pub photos: PhotoLookup,
    /// 사진 저장소 루트 (헬스체크용)
    pub storage_root: PathBuf,
    /// JWT 토큰 검증용 비밀키
    pub jwt_secret: String,
}

/// `GET /employee/{id}/photo` — 직원 사진 메타데이터를 조회합니다.
///
/// # Extractor
/// - `auth`: Bearer 토큰 검증. 실패하면 핸들러 본문은 실행되지 않고 401이 반환됩니다.
/// - `Path(id)`: URL의 `{id}` 부분. 형식 검사는 하지 않습니다
///   (이상한 ID는 "employee not found"로 끝납니다).
pub async fn get_employee_photo(
    // Extractor는 선언 순서대로 실행됩니다. 인증을 맨 앞에 두면
    // 토큰이 없는 요청은 DB를 건드리기 전에 거부됩니다.
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeePhoto>, PhotoError> {
    // `%`: 필드를 Debug가 아닌 Display(`{}`) 형식으로 기록하라는 tracing 문법
    tracing::debug!(client = %auth.subject, employee_id = %id, "Photo lookup requested");
    // `?`: Err(PhotoError)면 즉시 반환되고, Axum이 IntoResponse로 404/500 응답을 만듭니다.
    let photo = state.photos.lookup_photo(&id).await?;
    Ok(Json(photo))
}

/// `GET /employee/{id}/status` — 사진 등록 여부를 확인합니다.
///
/// 직원이 없거나, 사진 경로가 없거나, 파일이 없으면 모두 200 + `"not_registered"`입니다.
/// 예상하지 못한 장애만 500이 됩니다.
pub async fn get_employee_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PhotoStatus>, PhotoError> {
    tracing::debug!(client = %auth.subject, employee_id = %id, "Photo status requested");
    // 여기서는 NotFound가 오지 않습니다. photo_status가 "not_registered"로 바꿔 줍니다.
    let status = state.photos.photo_status(&id).await?;
    Ok(Json(status))
}
