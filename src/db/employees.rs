use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::EmployeeRecord;

/// 직원 레코드 저장소
///
/// 핸들러는 이 트레이트만 알고, 실제 저장 방식(SQLite 등)은 모릅니다.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// ID로 직원을 찾습니다. 없으면 `Ok(None)`
    async fn find_by_id(&self, id: &str) -> Result<Option<EmployeeRecord>, AppError>;
}

/// SQLite 기반 `EmployeeStore`
#[derive(Clone)]
pub struct SqliteEmployeeStore {
    pool: SqlitePool,
}

impl SqliteEmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SqliteEmployeeStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<EmployeeRecord>, AppError> {
        find_employee_by_id(&self.pool, id).await
    }
}

pub async fn find_employee_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<EmployeeRecord>, AppError> {
    let employee = sqlx::query_as::<_, EmployeeRecord>(
        r#"
        SELECT id, name, photo_path, updated_at
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

/// 데이터베이스 연결이 살아있는지 확인합니다. (헬스체크용)
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
