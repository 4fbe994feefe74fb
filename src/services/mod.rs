//! # 서비스(비즈니스 로직) 모듈
//!
//! - `photo`: 직원 사진 조회 (레코드 → 사진 메타데이터)
//! - `storage`: 사진 파일 저장소와 공개 URL 생성기

pub mod photo;
pub mod storage;

pub use photo::*;
pub use storage::*;
