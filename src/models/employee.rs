use chrono::{DateTime, Utc};
use serde::Serialize;

/// `employees` 테이블의 한 행
///
/// 이 서비스는 레코드를 읽기만 합니다. 생성/수정은 외부 시스템의 몫입니다.
/// 테이블의 나머지 컬럼(email, active, created_at)은 사진 조회에 쓰이지 않아 읽지 않습니다.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    /// 저장소 루트 기준 상대 경로 (예: "employees/123.jpg")
    pub photo_path: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeRecord {
    /// 등록된 사진 경로. 공백뿐인 값도 "사진 없음"으로 봅니다.
    pub fn registered_photo(&self) -> Option<&str> {
        self.photo_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

/// `GET /employee/{id}/photo` 성공 응답 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePhoto {
    pub success: bool,
    pub employee_id: String,
    pub employee_name: String,
    pub photo_url: String,
    /// 요청 시점에 디스크에서 읽은 파일 크기 (바이트)
    pub photo_size: u64,
    pub updated_at: DateTime<Utc>,
}

/// `GET /employee/{id}/status` 응답 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoStatus {
    pub employee_id: String,
    pub has_photo: bool,
    /// "registered" 또는 "not_registered"
    pub status: &'static str,
    pub checked_at: DateTime<Utc>,
}

impl PhotoStatus {
    pub fn new(employee_id: &str, has_photo: bool) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            has_photo,
            status: if has_photo { "registered" } else { "not_registered" },
            checked_at: Utc::now(),
        }
    }
}
