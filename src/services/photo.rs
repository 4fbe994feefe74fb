//! # 직원 사진 조회 서비스
//!
//! 직원 ID 하나를 받아 세 단계 검사를 순서대로 수행합니다.
//! 처음 실패한 단계에서 바로 멈추고(short-circuit) 그 이유를 돌려줍니다.
//!
//! 1. 직원 레코드가 있는가? → 없으면 "employee not found"
//! 2. photo_path가 등록되어 있는가? → 없으면 "no photo registered"
//! 3. 디스크에 파일이 있는가? → 없으면 "photo file missing on server"
//!
//! 세 단계를 모두 통과하면 `EmployeePhoto`를 만들어 반환합니다.
//! DB나 파일 시스템에서 예상하지 못한 장애가 나면 한 번만 로그를 남기고
//! `PhotoError::Internal`로 바꿉니다. 원인은 클라이언트에 노출하지 않습니다.
//!
//! `photo_status`는 같은 검사를 거쳐 "사진 등록 여부"만 알려줍니다.
//! 세 가지 "없음" 사유는 모두 `has_photo: false`가 됩니다.

use std::io;
use std::sync::Arc;

use crate::{
    db::EmployeeStore,
    error::{AppError, MissingPhoto, PhotoError},
    models::{EmployeePhoto, PhotoStatus},
    services::{AssetUrlBuilder, FileStore},
};

/// 사진 조회에 필요한 협력자 묶음
///
/// 저장소들은 `Arc<dyn Trait>`로 들고 있어서 clone 비용이 작습니다.
/// (axum의 State는 요청마다 clone됩니다)
#[derive(Clone)]
pub struct PhotoLookup {
    employees: Arc<dyn EmployeeStore>,
    files: Arc<dyn FileStore>,
    urls: AssetUrlBuilder,
}

impl PhotoLookup {
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        files: Arc<dyn FileStore>,
        urls: AssetUrlBuilder,
    ) -> Self {
        Self {
            employees,
            files,
            urls,
        }
    }

    /// 직원 사진 메타데이터를 조회합니다.
    ///
    /// 읽기만 합니다: DB 조회 1회, 파일 존재 확인 1회, 파일 크기 읽기 1회.
    pub async fn lookup_photo(&self, employee_id: &str) -> Result<EmployeePhoto, PhotoError> {
        let not_found = |reason: MissingPhoto| PhotoError::NotFound {
            reason,
            employee_id: employee_id.to_string(),
        };

        // 1단계: 레코드 조회
        let employee = self
            .employees
            .find_by_id(employee_id)
            .await
            .map_err(|e| internal(employee_id, &e))?
            .ok_or_else(|| not_found(MissingPhoto::Employee))?;

        // 2단계: photo_path 확인
        let photo_path = employee
            .registered_photo()
            .ok_or_else(|| not_found(MissingPhoto::NotRegistered))?;

        // 3단계: 실제 파일 확인
        let exists = self
            .files
            .exists(photo_path)
            .await
            .map_err(|e| internal(employee_id, &AppError::Io(e)))?;
        if !exists {
            tracing::debug!(employee_id, photo_path, "photo registered but file is missing");
            return Err(not_found(MissingPhoto::FileMissing));
        }

        let photo_size = match self.files.size_of(photo_path).await {
            Ok(size) => size,
            // 존재 확인과 크기 읽기 사이에 파일이 지워진 경우
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(not_found(MissingPhoto::FileMissing))
            }
            Err(e) => return Err(internal(employee_id, &AppError::Io(e))),
        };

        Ok(EmployeePhoto {
            success: true,
            employee_id: employee_id.to_string(),
            photo_url: self.urls.build(photo_path),
            employee_name: employee.name,
            photo_size,
            updated_at: employee.updated_at,
        })
    }

    /// 직원의 사진 등록 상태를 확인합니다.
    ///
    /// 사진 조회와 같은 세 단계를 거칩니다. 어느 단계에서든 "없음"이면 미등록으로 보고,
    /// 예상하지 못한 장애만 `Internal`로 전달합니다.
    pub async fn photo_status(&self, employee_id: &str) -> Result<PhotoStatus, PhotoError> {
        let has_photo = match self.lookup_photo(employee_id).await {
            Ok(_) => true,
            // `{ .. }`: 나머지 필드는 무시하고 variant만 매칭합니다.
            Err(PhotoError::NotFound { .. }) => false,
            Err(e) => return Err(e),
        };
        Ok(PhotoStatus::new(employee_id, has_photo))
    }
}

/// 예상하지 못한 장애를 기록하고 `Internal`로 변환합니다.
fn internal(employee_id: &str, error: &AppError) -> PhotoError {
    tracing::error!(employee_id, "Failed to look up employee photo: {}", error);
    PhotoError::Internal {
        employee_id: employee_id.to_string(),
    }
}
