//! # 사진 파일 저장소
//!
//! 직원 레코드의 `photo_path`를 실제 파일 위치와 공개 URL로 바꾸는 협력자들입니다.
//!
//! - `FileStore`: 파일 존재 여부와 크기를 확인하는 트레이트
//! - `LocalDiskStore`: 로컬 디렉토리(저장소 루트) 기반 구현
//! - `AssetUrlBuilder`: 공개 URL 접두사 + photo_path → 사진 URL

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

/// 사진 파일이 저장된 곳
///
/// 모든 경로는 저장소 루트 기준의 상대 경로(photo_path)입니다.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// 파일이 존재하면 true. 권한 문제 등으로 확인할 수 없으면 Err
    async fn exists(&self, path: &str) -> io::Result<bool>;

    /// 파일의 현재 크기 (바이트). 캐시하지 않고 호출 시점에 읽습니다.
    async fn size_of(&self, path: &str) -> io::Result<u64>;
}

/// 로컬 디스크의 한 디렉토리를 저장소 루트로 쓰는 `FileStore`
#[derive(Debug, Clone)]
pub struct LocalDiskStore {
    root: PathBuf,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// photo_path를 저장소 루트에 이어 붙입니다.
    ///
    /// 루트 밖을 가리킬 수 있는 경로(`..`, Windows 드라이브 접두사 등)는 None입니다.
    /// `Path::join`은 절대 경로를 받으면 루트를 버리므로 앞의 `/`를 먼저 제거합니다.
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        // components(): 경로를 "a", "..", "b.jpg" 같은 조각으로 나눕니다.
        // 일반 이름(Normal)과 "."(CurDir)만 허용하면 결과는 항상 루트 아래에 머뭅니다.
        let inside_root = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        inside_root.then(|| self.root.join(relative))
    }
}

#[async_trait]
impl FileStore for LocalDiskStore {
    async fn exists(&self, path: &str) -> io::Result<bool> {
        // 루트 밖을 가리키는 경로는 "파일 없음"과 같게 취급합니다.
        let Some(resolved) = self.resolve(path) else {
            tracing::warn!(photo_path = path, "photo path escapes storage root");
            return Ok(false);
        };
        // try_exists: 없으면 Ok(false), 확인 자체가 실패하면 Err
        if !tokio::fs::try_exists(&resolved).await? {
            return Ok(false);
        }
        // 디렉토리는 사진 파일이 아닙니다.
        Ok(tokio::fs::metadata(&resolved).await?.is_file())
    }

    async fn size_of(&self, path: &str) -> io::Result<u64> {
        let resolved = self
            .resolve(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "photo path escapes storage root"))?;
        let metadata = tokio::fs::metadata(resolved).await?;
        Ok(metadata.len())
    }
}

/// 공개 URL 생성기
///
/// `build("employees/123.jpg")` → `"https://example.com/storage/employees/123.jpg"`
#[derive(Debug, Clone)]
pub struct AssetUrlBuilder {
    base: String,
}

impl AssetUrlBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn build(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}
