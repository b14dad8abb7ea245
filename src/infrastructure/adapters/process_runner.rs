//! 외부 명령 실행 포트 구현 어댑터.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::CommandRunner;
use crate::infrastructure::config::command_exists;

/// tokio 프로세스로 명령을 실행하고 시간 제한을 건다.
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    fn exists(&self, program: &str) -> bool {
        command_exists(program)
    }

    async fn run(&self, program: &str, args: &[String], timeout: Duration) -> Result<String> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn '{program}'"))?;

        // 시간 초과 시 future가 drop되며 자식 프로세스도 종료된다.
        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| anyhow!("'{program}' timed out after {}ms", timeout.as_millis()))?
            .with_context(|| format!("'{program}' execution failed"))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            bail!(
                "'{}' failed ({}): {}",
                program,
                output.status,
                if stderr.is_empty() {
                    "no stderr output"
                } else {
                    stderr.as_str()
                }
            );
        }

        Ok(stdout)
    }
}
