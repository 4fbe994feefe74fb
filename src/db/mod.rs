//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 사진 조회 서비스는 `EmployeeStore` 트레이트를 통해서만 이 계층을 사용합니다.
//!
//! 각 하위 모듈:
//! - `employees`: 직원 레코드 조회 쿼리와 `EmployeeStore` 구현

pub mod employees;

pub use employees::*;

/// 마이그레이션까지 적용된 인메모리 SQLite 풀 (테스트용)
///
/// `sqlite::memory:`는 연결마다 별도의 DB가 생기므로 연결을 1개로 제한합니다.
#[cfg(test)]
pub async fn test_pool() -> sqlx::SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}
