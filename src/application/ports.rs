//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::ProbeConfig;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<ProbeConfig>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 읽기 전용 파일시스템 포트. 테스트에서는 메모리 구현으로 대체한다.
pub trait FileSystem: Send + Sync {
    /// 없는 파일은 `io::ErrorKind::NotFound`로 실패한다.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    /// 존재 여부를 확인할 수 없으면(상위 디렉터리 권한 등) 오류다.
    fn exists(&self, path: &Path) -> io::Result<bool>;
    fn is_file(&self, path: &Path) -> bool;
    /// 디렉터리의 직계 항목 이름 목록.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// 외부 명령 실행 포트.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    fn exists(&self, program: &str) -> bool;
    /// 성공 종료 시 stdout(trim)을 반환한다. 시간 초과/비정상 종료는 오류다.
    async fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<String>;
}

/// 직렬화된 보고서를 전달하는 출력 포트.
pub trait ReportSink: Send + Sync {
    /// 전달에 성공하면 저장된 파일 경로를 반환한다.
    fn deliver(&self, text: &str) -> Result<PathBuf>;
}
