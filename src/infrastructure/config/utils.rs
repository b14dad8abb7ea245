//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::Path;

/// fact 명령처럼 설정에 적힌 프로그램이 실행 가능한지 확인한다.
/// 경로 구분자가 있으면 그 파일만, 없으면 `PATH`를 순회한다.
pub fn command_exists(command: &str) -> bool {
    let command = command.trim();
    if command.is_empty() {
        return false;
    }

    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return is_executable(command_path);
    }

    env::var_os("PATH")
        .map(|path_var| env::split_paths(&path_var).any(|dir| is_executable(&dir.join(command))))
        .unwrap_or(false)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
