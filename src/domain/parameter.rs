//! 보고 대상 파라미터 선언 테이블.
//! 파라미터 추가는 이 테이블에 한 줄을 더하는 것으로 끝나야 한다.

use serde::Serialize;

/// 설정 파일 문법(키/값 구분자).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `key: value`
    Colon,
    /// `key = value`
    Ini,
}

impl Dialect {
    pub fn separator(self) -> char {
        match self {
            Dialect::Colon => ':',
            Dialect::Ini => '=',
        }
    }
}

/// 값을 읽어 올 설정 파일 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// 애플리케이션 서버 설정(`conf.d/*.conf`)
    ServiceConf,
    /// 데이터 서비스 설정(`conf.d/config.ini`)
    DataServiceConf,
    /// 버전별 디렉터리 아래의 데이터베이스 설정
    DatabaseConf,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [
        SourceKind::ServiceConf,
        SourceKind::DataServiceConf,
        SourceKind::DatabaseConf,
    ];

    pub fn dialect(self) -> Dialect {
        match self {
            SourceKind::ServiceConf => Dialect::Colon,
            SourceKind::DataServiceConf | SourceKind::DatabaseConf => Dialect::Ini,
        }
    }
}

/// 명시 값이 없을 때 사용할 기본값 계산 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// CPU 코어 수 기반 JRuby 인스턴스 수
    ProcessorCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Pattern {
        source: SourceKind,
        key: &'static str,
        fallback: Option<Fallback>,
    },
    JavaArgs {
        service: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub strategy: Strategy,
}

const fn pattern(name: &'static str, source: SourceKind, key: &'static str) -> ParameterSpec {
    ParameterSpec {
        name,
        strategy: Strategy::Pattern {
            source,
            key,
            fallback: None,
        },
    }
}

const fn java_args(name: &'static str, service: &'static str) -> ParameterSpec {
    ParameterSpec {
        name,
        strategy: Strategy::JavaArgs { service },
    }
}

/// 보고서에 항상 포함되는 파라미터(순서 = 보고서 순서).
pub const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "puppet_enterprise.master.puppetserver.jruby_max_active_instances",
        strategy: Strategy::Pattern {
            source: SourceKind::ServiceConf,
            key: "max-active-instances",
            fallback: Some(Fallback::ProcessorCount),
        },
    },
    pattern(
        "puppet_enterprise.master.puppetserver.jruby_max_requests_per_instance",
        SourceKind::ServiceConf,
        "max-requests-per-instance",
    ),
    java_args("puppet_enterprise.profile.master.java_args", "pe-puppetserver"),
    java_args("puppet_enterprise.profile.puppetdb.java_args", "pe-puppetdb"),
    java_args("puppet_enterprise.profile.console.java_args", "pe-console-services"),
    java_args(
        "puppet_enterprise.profile.orchestrator.java_args",
        "pe-orchestration-services",
    ),
    pattern(
        "puppet_enterprise.puppetdb.command_processing_threads",
        SourceKind::DataServiceConf,
        "threads",
    ),
    pattern(
        "puppet_enterprise.profile.database.shared_buffers",
        SourceKind::DatabaseConf,
        "shared_buffers",
    ),
    pattern(
        "puppet_enterprise.profile.database.max_connections",
        SourceKind::DatabaseConf,
        "max_connections",
    ),
    pattern(
        "puppet_enterprise.profile.database.work_mem",
        SourceKind::DatabaseConf,
        "work_mem",
    ),
    pattern(
        "puppet_enterprise.profile.database.maintenance_work_mem",
        SourceKind::DatabaseConf,
        "maintenance_work_mem",
    ),
    pattern(
        "puppet_enterprise.profile.database.autovacuum_work_mem",
        SourceKind::DatabaseConf,
        "autovacuum_work_mem",
    ),
    pattern(
        "puppet_enterprise.profile.database.autovacuum_max_workers",
        SourceKind::DatabaseConf,
        "autovacuum_max_workers",
    ),
];
