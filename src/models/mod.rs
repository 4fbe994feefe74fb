//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `employee`: 직원 레코드와 사진 조회 응답 구조체
//!
//! `pub use X::*;`는 하위 모듈의 모든 공개 항목을 재공개(re-export)합니다.
//! 예: `crate::models::employee::EmployeeRecord` 대신 `crate::models::EmployeeRecord`로 접근 가능

pub mod employee;

pub use employee::*;
