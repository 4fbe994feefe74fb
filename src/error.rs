//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError`: 저장소/파일 시스템 등 인프라 계층의 에러를 하나로 통합
//! - `PhotoError`: 사진 조회 결과 중 실패 경우(404 / 500)를 표현
//! - `IntoResponse` 구현: `PhotoError`를 HTTP 응답으로 자동 변환

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 인프라 계층(DB, 파일 I/O)에서 발생하는 에러
///
/// 핸들러까지 그대로 전달되지 않습니다.
/// 사진 조회 서비스가 이 에러를 잡아서 로그를 남기고 `PhotoError::Internal`로 바꿉니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 데이터베이스 오류
    /// #[from]: sqlx::Error → AppError::Database 자동 변환 (`?` 연산자와 함께 사용)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 파일 입출력 오류
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 사진이 없다고 판단한 이유 (세 가지 모두 HTTP 404)
///
/// 순서대로 검사하며, 처음 실패한 단계의 이유가 응답에 담깁니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPhoto {
    /// 1단계: 해당 ID의 직원 레코드가 없음
    Employee,
    /// 2단계: 레코드는 있지만 photo_path가 비어 있음
    NotRegistered,
    /// 3단계: photo_path는 있지만 디스크에 파일이 없음
    FileMissing,
}

impl MissingPhoto {
    /// 클라이언트에 그대로 전달되는 사유 문자열
    pub fn reason(self) -> &'static str {
        match self {
            MissingPhoto::Employee => "employee not found",
            MissingPhoto::NotRegistered => "no photo registered",
            MissingPhoto::FileMissing => "photo file missing on server",
        }
    }
}

/// 사진 조회 실패
///
/// 예상 가능한 "없음" 상황은 `NotFound`로, 그 밖의 모든 장애는 `Internal`로 표현합니다.
/// `Internal`은 내부 원인을 담지 않습니다. 원인은 변환 시점에 이미 로그로 남겼습니다.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("{}: {employee_id}", .reason.reason())]
    NotFound {
        reason: MissingPhoto,
        employee_id: String,
    },

    #[error("internal error while looking up photo for {employee_id}")]
    Internal { employee_id: String },
}

/// 500 응답의 고정 메시지. 내부 구현 정보는 절대 노출하지 않습니다.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

impl IntoResponse for PhotoError {
    /// PhotoError를 HTTP 응답으로 변환합니다.
    ///
    /// 두 경우 모두 `{ "error": ..., "employee_id": ... }` 형태의 본문을 가집니다.
    /// 로그는 여기서 남기지 않습니다 (에러가 만들어진 곳에서 이미 한 번 기록).
    fn into_response(self) -> Response {
        let (status, message, employee_id) = match self {
            PhotoError::NotFound {
                reason,
                employee_id,
            } => (StatusCode::NOT_FOUND, reason.reason(), employee_id),
            PhotoError::Internal { employee_id } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
                employee_id,
            ),
        };

        let body = Json(json!({
            "error": message,
            "employee_id": employee_id
        }));

        (status, body).into_response()
    }
}
