//! 서비스 기본값 파일에서 JVM 인자 문자열을 읽는다.

use std::path::PathBuf;

use serde::Serialize;

use super::read_source;
use crate::application::config::ProbeConfig;
use crate::application::ports::FileSystem;
use crate::domain::java_args::{MAX_HEAP_FLAG, find_quoted_args};
use crate::domain::settings::LookupMiss;

/// 서비스 기본값 디렉터리를 결정하는 OS 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Debian,
    RedHat,
}

pub struct JavaArgsReader<'a> {
    pub fs: &'a dyn FileSystem,
    pub config: &'a ProbeConfig,
}

impl<'a> JavaArgsReader<'a> {
    /// Debian 표식 파일이 있으면 Debian 계열로 본다.
    pub fn os_family(&self) -> OsFamily {
        if self.fs.is_file(&self.config.host_path(&self.config.debian_marker)) {
            OsFamily::Debian
        } else {
            OsFamily::RedHat
        }
    }

    /// OS 계열에 맞는 서비스 기본값 디렉터리.
    pub fn defaults_dir(&self) -> PathBuf {
        let dir = match self.os_family() {
            OsFamily::Debian => &self.config.debian_defaults_dir,
            OsFamily::RedHat => &self.config.redhat_defaults_dir,
        };
        self.config.host_path(dir)
    }

    pub fn defaults_path(&self, service: &str) -> PathBuf {
        self.defaults_dir().join(service)
    }

    /// 최대 힙 표식이 있는 첫 줄의 따옴표 안 문자열.
    pub fn read(&self, service: &str) -> Result<String, LookupMiss> {
        let path = self.defaults_path(service);
        let contents = read_source(self.fs, &path)?;
        find_quoted_args(&contents).ok_or_else(|| LookupMiss::NoMatch {
            key: format!("{MAX_HEAP_FLAG} in {}", path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFileSystem;

    #[test]
    fn redhat_family_reads_sysconfig() {
        let fs = MemoryFileSystem::default().with_file(
            "/etc/sysconfig/pe-puppetdb",
            "JAVA_ARGS=\"-Xms256m -Xmx256m\"\n",
        );
        let config = ProbeConfig::default();
        let reader = JavaArgsReader {
            fs: &fs,
            config: &config,
        };

        assert_eq!(reader.os_family(), OsFamily::RedHat);
        assert_eq!(reader.read("pe-puppetdb").unwrap(), "-Xms256m -Xmx256m");
    }

    #[test]
    fn debian_marker_switches_directory() {
        let fs = MemoryFileSystem::default()
            .with_file("/etc/debian_version", "12.5\n")
            .with_file("/etc/sysconfig/pe-puppetdb", "JAVA_ARGS=\"-Xmx1g\"\n")
            .with_file("/etc/default/pe-puppetdb", "JAVA_ARGS=\"-Xmx2g\"\n");
        let config = ProbeConfig::default();
        let reader = JavaArgsReader {
            fs: &fs,
            config: &config,
        };

        assert_eq!(reader.os_family(), OsFamily::Debian);
        assert_eq!(
            reader.defaults_path("pe-puppetdb"),
            PathBuf::from("/etc/default/pe-puppetdb")
        );
        assert_eq!(reader.read("pe-puppetdb").unwrap(), "-Xmx2g");
    }

    #[test]
    fn missing_file_or_marker_is_a_miss() {
        let fs = MemoryFileSystem::default()
            .with_file("/etc/sysconfig/pe-console-services", "USER=\"pe-console\"\n");
        let config = ProbeConfig::default();
        let reader = JavaArgsReader {
            fs: &fs,
            config: &config,
        };

        assert!(matches!(
            reader.read("pe-orchestration-services"),
            Err(LookupMiss::SourceAbsent(_))
        ));
        assert!(matches!(
            reader.read("pe-console-services"),
            Err(LookupMiss::NoMatch { .. })
        ));
    }
}
