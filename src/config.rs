//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: 직원 레코드가 들어있는 SQLite 데이터베이스 경로
//! - `JWT_SECRET`: Bearer 토큰 서명/검증에 사용할 비밀키
//! - `STORAGE_ROOT`: 직원 사진 파일이 저장된 디렉토리 (photo_path의 기준 경로)
//! - `ASSET_BASE_URL`: 사진 파일이 공개되는 URL 접두사
//! - `SERVE_STORAGE`: 이 서버가 `/storage` 경로로 사진 파일을 직접 서빙할지 여부
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// `AppState`를 만드는 데 사용됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 경로 (예: "sqlite:data/employees.db")
    pub database_url: String,
    /// JWT 토큰 서명/검증에 사용하는 비밀키
    pub jwt_secret: String,
    /// 사진 파일 저장소 루트 (기본값: "storage/app/public")
    pub storage_root: String,
    /// 사진 URL 접두사 (기본값: "http://localhost:3000/storage")
    pub asset_base_url: String,
    /// `/storage` 정적 파일 서빙 여부 (기본값: true)
    pub serve_storage: bool,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`과 `JWT_SECRET`은 필수이며, 없으면 에러가 발생합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        // `?` 연산자: env::var가 Err를 반환하면 즉시 함수를 빠져나가 그 에러를 돌려줍니다.
        // 기본값이 있는 항목은 `?` 대신 unwrap_or_else로 Err를 기본값으로 바꿉니다.
        Ok(Self {
            database_url: env::var("DATABASE_URL")?, // 필수
            jwt_secret: env::var("JWT_SECRET")?,     // 필수
            // unwrap_or_else(|_| ...): 클로저는 Err일 때만 실행되므로
            // 값이 있으면 기본 문자열을 만들지 않습니다. `|_|`는 에러 값을 무시한다는 뜻입니다.
            storage_root: env::var("STORAGE_ROOT")
                .unwrap_or_else(|_| "storage/app/public".to_string()),
            asset_base_url: env::var("ASSET_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/storage".to_string()),
            // "false", "0", "no", "off" 이외의 값은 모두 true로 취급합니다.
            // Result::map: Ok 안의 String만 bool로 바꾸고, Err(변수 없음)는 그대로 둡니다.
            serve_storage: env::var("SERVE_STORAGE")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // parse()의 결과 타입은 필드 타입(u16)에서 추론됩니다.
            // 숫자가 아니거나 65535를 넘으면 기본값 3000을 씁니다.
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}

/// 환경변수 문자열을 on/off 플래그로 해석합니다.
fn parse_flag(value: &str) -> bool {
    // matches!: 값이 패턴 중 하나와 일치하면 true를 돌려주는 매크로 (match의 축약형)
    // `.as_str()`: String은 문자열 리터럴 패턴과 직접 비교할 수 없어 &str로 바꿉니다.
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
