//! 설정 파일 위치 결정과 값 추출 컴포넌트.
//! 파일시스템/프로세스는 포트를 통해서만 접근한다.

mod inferencer;
mod java_args;
mod locator;

use std::io;
use std::path::Path;

pub use inferencer::DefaultInferencer;
pub use java_args::{JavaArgsReader, OsFamily};
pub use locator::{ConfigFileLocator, ConfigSource};

use crate::application::ports::FileSystem;
use crate::domain::settings::LookupMiss;

/// 파일 내용을 읽는다. 없는 파일은 읽기를 시도하지 않고 `SourceAbsent`를 돌려준다.
/// 존재 여부조차 확인할 수 없으면 `SourceUnreadable`이다.
pub(crate) fn read_source(fs: &dyn FileSystem, path: &Path) -> Result<String, LookupMiss> {
    match fs.exists(path) {
        Ok(true) => {}
        Ok(false) => return Err(LookupMiss::SourceAbsent(path.to_path_buf())),
        Err(err) => return Err(io_miss(path, &err)),
    }

    fs.read_to_string(path).map_err(|err| io_miss(path, &err))
}

/// NotFound는 부재, 그 밖의 I/O 오류는 읽기 불가로 분류한다.
fn io_miss(path: &Path, err: &io::Error) -> LookupMiss {
    match err.kind() {
        io::ErrorKind::NotFound => LookupMiss::SourceAbsent(path.to_path_buf()),
        _ => LookupMiss::SourceUnreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}
