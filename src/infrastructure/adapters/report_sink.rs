//! 보고서 출력 포트 구현 어댑터(콘솔 + 파일).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ReportSink;

/// 보고서를 stdout에 출력하고 작업 디렉터리의 고정 파일에 저장한다.
pub struct ConsoleFileSink {
    pub output_dir: PathBuf,
    pub output_file: String,
    pub echo: bool,
}

impl ReportSink for ConsoleFileSink {
    fn deliver(&self, text: &str) -> Result<PathBuf> {
        if self.echo {
            println!("{text}");
        }

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        // 한 번의 전체 버퍼 쓰기로 저장한다.
        let path = self.output_dir.join(&self.output_file);
        fs::write(&path, format!("{text}\n"))
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(path)
    }
}
