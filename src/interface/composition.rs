//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::config::{ProbeConfig, ToolConfig};
use crate::application::ports::ConfigRepository;
use crate::application::usecases::collect_settings::CollectSettingsUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{
    ConsoleFileSink, JsonConfigRepository, LocalFileSystem, TokioCommandRunner,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    config: ProbeConfig,
    fs: LocalFileSystem,
    runner: TokioCommandRunner,
    sink: ConsoleFileSink,
}

impl AppComposition {
    /// 설정 레이어와 CLI 덮어쓰기를 병합해 실행 조합을 만든다.
    /// 설정 파일이 깨져 있으면 시작 단계에서 실패한다.
    pub fn load(overrides: ToolConfig) -> Result<Self> {
        let config_repo = JsonConfigRepository { overrides };
        let config = config_repo.load()?;
        Ok(Self::with_config(config_repo, config))
    }

    fn with_config(config_repo: JsonConfigRepository, config: ProbeConfig) -> Self {
        let sink = ConsoleFileSink {
            output_dir: config.output_dir.clone(),
            output_file: config.output_file.clone(),
            echo: true,
        };
        Self {
            config_repo,
            config,
            fs: LocalFileSystem,
            runner: TokioCommandRunner,
            sink,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 튜닝 값 수집 유스케이스를 생성한다.
    pub fn collect_settings_usecase(&self) -> CollectSettingsUseCase<'_> {
        CollectSettingsUseCase {
            config: &self.config,
            fs: &self.fs,
            runner: &self.runner,
            sink: &self.sink,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::application::config::{FactsConfig, OutputConfig};
    use crate::domain::settings::{ReportEntry, Setting, SettingsReport};

    fn overrides_for(root: PathBuf, output_dir: PathBuf) -> ToolConfig {
        ToolConfig {
            root: Some(root),
            facts: FactsConfig {
                command: Some("/nonexistent/bin/facter".to_string()),
                ..Default::default()
            },
            output: OutputConfig {
                dir: Some(output_dir),
                file: None,
            },
            ..Default::default()
        }
    }

    fn compose(overrides: ToolConfig) -> AppComposition {
        let config = overrides.resolve();
        AppComposition::with_config(JsonConfigRepository { overrides }, config)
    }

    #[tokio::test]
    async fn bare_host_still_writes_full_report() {
        let host = tempfile::TempDir::new().unwrap();
        let out = host.path().join("work/output");
        let app = compose(overrides_for(host.path().to_path_buf(), out.clone()));

        let text = app.collect_settings_usecase().execute().await.unwrap();

        let written = fs::read_to_string(out.join("current_settings.json")).unwrap();
        assert_eq!(written.trim_end(), text);
        let report = SettingsReport::from_json(&written).unwrap();
        assert_eq!(report.len(), 13);
        assert_eq!(report.available_count(), 0);
    }

    #[tokio::test]
    async fn reads_real_files_under_root() {
        let host = tempfile::TempDir::new().unwrap();
        let root = host.path();
        let write = |rel: &str, contents: &str| {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, contents).unwrap();
        };
        write(
            "etc/puppetlabs/puppetserver/conf.d/pe-puppet-server.conf",
            "jruby-puppet: {\n    max-active-instances: 3\n}\n",
        );
        write(
            "opt/puppetlabs/server/data/postgresql/9.6/data/postgresql.conf",
            "work_mem = 1MB\n",
        );
        write(
            "opt/puppetlabs/server/data/postgresql/14/data/postgresql.conf",
            "work_mem = 16MB\nautovacuum_work_mem = 64MB\n",
        );
        write(
            "etc/sysconfig/pe-console-services",
            "JAVA_ARGS=\"-Xmx256m -Xms256m -Djava.security.egd=/dev/urandom\"\n",
        );

        let app = compose(overrides_for(root.to_path_buf(), root.join("out")));
        let text = app.collect_settings_usecase().execute().await.unwrap();
        let report = SettingsReport::from_json(&text).unwrap();

        assert_eq!(
            report.get("puppet_enterprise.master.puppetserver.jruby_max_active_instances"),
            Some(&ReportEntry::Scalar(Setting::value("3")))
        );
        assert_eq!(
            report.get("puppet_enterprise.profile.database.work_mem"),
            Some(&ReportEntry::Scalar(Setting::value("16MB")))
        );
        match report.get("puppet_enterprise.profile.console.java_args") {
            Some(ReportEntry::JavaArgs(record)) => {
                assert_eq!(record.xmx, Setting::value("256m"));
                assert_eq!(record.xms, Setting::value("256m"));
                assert_eq!(
                    record.misc,
                    Setting::value("-Djava.security.egd=/dev/urandom")
                );
            }
            other => panic!("expected java args record, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unwritable_output_fails_the_run() {
        let host = tempfile::TempDir::new().unwrap();
        let blocker = host.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let app = compose(overrides_for(host.path().to_path_buf(), blocker.join("out")));

        assert!(app.collect_settings_usecase().execute().await.is_err());
    }
}
