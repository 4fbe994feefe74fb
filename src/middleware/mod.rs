//! # 미들웨어 모듈
//!
//! - `auth`: Bearer 토큰(JWT) 검증 Extractor

pub mod auth;
