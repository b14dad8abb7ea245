//! 테스트 전용 포트 구현(메모리 파일시스템, 가짜 명령 실행기, 기록용 출력).

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;

use crate::application::ports::{CommandRunner, FileSystem, ReportSink};

#[derive(Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
    unreadable: BTreeSet<PathBuf>,
    denied_dirs: BTreeSet<PathBuf>,
    reads: AtomicUsize,
}

impl MemoryFileSystem {
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.insert(path.into(), contents.to_string());
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// 디렉터리 자체는 보이지만 그 안을 들여다볼 수 없는 상태(EACCES)를 흉내 낸다.
    pub fn with_denied_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied_dirs.insert(path.into());
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn all_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.keys().chain(self.unreadable.iter())
    }

    fn behind_denied_dir(&self, path: &Path) -> bool {
        self.denied_dirs
            .iter()
            .any(|dir| path != dir && path.starts_with(dir))
    }
}

fn permission_denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.unreadable.contains(path) || self.behind_denied_dir(path) {
            return Err(permission_denied());
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        if self.behind_denied_dir(path) {
            return Err(permission_denied());
        }
        Ok(self.all_paths().any(|file| file.starts_with(path)))
    }

    fn is_file(&self, path: &Path) -> bool {
        !self.behind_denied_dir(path)
            && (self.files.contains_key(path) || self.unreadable.contains(path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        if self.denied_dirs.iter().any(|dir| path.starts_with(dir)) {
            return Err(permission_denied());
        }
        let names: BTreeSet<String> = self
            .all_paths()
            .filter_map(|file| file.strip_prefix(path).ok())
            .filter_map(|rest| rest.components().next())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if names.is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        Ok(names.into_iter().collect())
    }
}

pub struct FakeRunner {
    available: bool,
    output: Result<String, String>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, Vec<String>)>>,
}

impl FakeRunner {
    fn new(available: bool, output: Result<String, String>) -> Self {
        Self {
            available,
            output,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn printing(stdout: &str) -> Self {
        Self::new(true, Ok(stdout.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(true, Err(message.to_string()))
    }

    pub fn missing() -> Self {
        Self::new(false, Err("not installed".to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_invocation(&self) -> Option<(String, Vec<String>)> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    fn exists(&self, _program: &str) -> bool {
        self.available
    }

    async fn run(&self, program: &str, args: &[String], _timeout: Duration) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last.lock() {
            *last = Some((program.to_string(), args.to_vec()));
        }
        self.output.clone().map_err(|msg| anyhow!(msg))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    fail: bool,
    delivered: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn delivered(&self) -> Vec<String> {
        self.delivered
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl ReportSink for RecordingSink {
    fn deliver(&self, text: &str) -> Result<PathBuf> {
        if self.fail {
            bail!("failed to write report: disk full");
        }
        if let Ok(mut delivered) = self.delivered.lock() {
            delivered.push(text.to_string());
        }
        Ok(PathBuf::from("memory://report.json"))
    }
}
