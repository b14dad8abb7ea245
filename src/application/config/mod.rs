//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_CONF: &str = "/etc/puppetlabs/puppetserver/conf.d/pe-puppet-server.conf";
pub const DEFAULT_DATA_SERVICE_CONF: &str = "/etc/puppetlabs/puppetdb/conf.d/config.ini";
pub const DEFAULT_DATABASE_CONF_GLOB: &str =
    "/opt/puppetlabs/server/data/postgresql/*/data/postgresql.conf";
pub const DEFAULT_DEBIAN_MARKER: &str = "/etc/debian_version";
pub const DEFAULT_DEBIAN_DEFAULTS_DIR: &str = "/etc/default";
pub const DEFAULT_REDHAT_DEFAULTS_DIR: &str = "/etc/sysconfig";
pub const DEFAULT_FACTS_COMMAND: &str = "/opt/puppetlabs/bin/facter";
pub const DEFAULT_FACTS_ARGS: &[&str] = &["processors.count"];
pub const DEFAULT_FACTS_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_INFERENCE_MIN: i64 = 1;
pub const DEFAULT_INFERENCE_MAX: i64 = 4;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_FILE: &str = "current_settings.json";

/// 설정 파일(JSON) 스키마. 모든 값은 선택이며 뒤 레이어가 앞 레이어를 덮어쓴다.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ToolConfig {
    /// 입력 경로를 다시 루팅할 호스트 루트(기본 `/`)
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub facts: FactsConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// 읽을 수 없는 입력 파일을 치명적 오류로 취급할지 여부
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PathsConfig {
    pub service_conf: Option<PathBuf>,
    pub data_service_conf: Option<PathBuf>,
    /// `*`/`?` 와일드카드를 포함할 수 있는 데이터베이스 설정 경로
    pub database_conf_glob: Option<String>,
    pub debian_marker: Option<PathBuf>,
    pub debian_defaults_dir: Option<PathBuf>,
    pub redhat_defaults_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FactsConfig {
    /// CPU 코어 수를 출력하는 명령
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InferenceConfig {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub file: Option<String>,
}

/// 실행 시작 시 한 번 확정되는 불변 설정. 모든 컴포넌트에 참조로 전달된다.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeConfig {
    pub root: PathBuf,
    pub service_conf: PathBuf,
    pub data_service_conf: PathBuf,
    pub database_conf_glob: String,
    pub debian_marker: PathBuf,
    pub debian_defaults_dir: PathBuf,
    pub redhat_defaults_dir: PathBuf,
    pub facts_command: String,
    pub facts_args: Vec<String>,
    pub facts_timeout_ms: u64,
    pub inference_min: i64,
    pub inference_max: i64,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub strict: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ToolConfig::default().resolve()
    }
}

impl ProbeConfig {
    /// 절대 경로를 `root` 아래로 옮긴다. `root`가 `/`이면 그대로다.
    pub fn host_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let relative: PathBuf = path
            .as_ref()
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        self.root.join(relative)
    }

    pub fn database_conf_pattern(&self) -> PathBuf {
        self.host_path(&self.database_conf_glob)
    }

    pub fn facts_timeout(&self) -> Duration {
        Duration::from_millis(self.facts_timeout_ms)
    }
}

impl ToolConfig {
    /// 빈 값은 기본값으로 채워 불변 설정을 만든다.
    pub fn resolve(&self) -> ProbeConfig {
        let paths = &self.paths;
        ProbeConfig {
            root: self.root.clone().unwrap_or_else(|| PathBuf::from("/")),
            service_conf: paths
                .service_conf
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVICE_CONF.into()),
            data_service_conf: paths
                .data_service_conf
                .clone()
                .unwrap_or_else(|| DEFAULT_DATA_SERVICE_CONF.into()),
            database_conf_glob: paths
                .database_conf_glob
                .clone()
                .unwrap_or_else(|| DEFAULT_DATABASE_CONF_GLOB.to_string()),
            debian_marker: paths
                .debian_marker
                .clone()
                .unwrap_or_else(|| DEFAULT_DEBIAN_MARKER.into()),
            debian_defaults_dir: paths
                .debian_defaults_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_DEBIAN_DEFAULTS_DIR.into()),
            redhat_defaults_dir: paths
                .redhat_defaults_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_REDHAT_DEFAULTS_DIR.into()),
            facts_command: self
                .facts
                .command
                .clone()
                .unwrap_or_else(|| DEFAULT_FACTS_COMMAND.to_string()),
            facts_args: self.facts.args.clone().unwrap_or_else(|| {
                DEFAULT_FACTS_ARGS.iter().map(|s| s.to_string()).collect()
            }),
            facts_timeout_ms: self.facts.timeout_ms.unwrap_or(DEFAULT_FACTS_TIMEOUT_MS),
            inference_min: self.inference.min.unwrap_or(DEFAULT_INFERENCE_MIN),
            inference_max: self.inference.max.unwrap_or(DEFAULT_INFERENCE_MAX),
            output_dir: self
                .output
                .dir
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into()),
            output_file: self
                .output
                .file
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            strict: self.strict.unwrap_or(false),
        }
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: ToolConfig) {
        if other.root.is_some() {
            self.root = other.root;
        }
        if other.strict.is_some() {
            self.strict = other.strict;
        }
        self.paths.merge_from(other.paths);
        self.facts.merge_from(other.facts);
        self.inference.merge_from(other.inference);
        self.output.merge_from(other.output);
    }
}

impl PathsConfig {
    fn merge_from(&mut self, other: PathsConfig) {
        if other.service_conf.is_some() {
            self.service_conf = other.service_conf;
        }
        if other.data_service_conf.is_some() {
            self.data_service_conf = other.data_service_conf;
        }
        if other.database_conf_glob.is_some() {
            self.database_conf_glob = other.database_conf_glob;
        }
        if other.debian_marker.is_some() {
            self.debian_marker = other.debian_marker;
        }
        if other.debian_defaults_dir.is_some() {
            self.debian_defaults_dir = other.debian_defaults_dir;
        }
        if other.redhat_defaults_dir.is_some() {
            self.redhat_defaults_dir = other.redhat_defaults_dir;
        }
    }
}

impl FactsConfig {
    fn merge_from(&mut self, other: FactsConfig) {
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.args.is_some() {
            self.args = other.args;
        }
        if other.timeout_ms.is_some() {
            self.timeout_ms = other.timeout_ms;
        }
    }
}

impl InferenceConfig {
    fn merge_from(&mut self, other: InferenceConfig) {
        if other.min.is_some() {
            self.min = other.min;
        }
        if other.max.is_some() {
            self.max = other.max;
        }
    }
}

impl OutputConfig {
    fn merge_from(&mut self, other: OutputConfig) {
        if other.dir.is_some() {
            self.dir = other.dir;
        }
        if other.file.is_some() {
            self.file = other.file;
        }
    }
}
