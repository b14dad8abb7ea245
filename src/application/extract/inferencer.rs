//! 명시 설정이 없을 때 JRuby 최대 활성 인스턴스 기본값을 계산한다.

use tracing::debug;

use crate::application::config::ProbeConfig;
use crate::application::ports::CommandRunner;
use crate::domain::policy::jruby_instances_for;
use crate::domain::settings::LookupMiss;

pub struct DefaultInferencer<'a> {
    pub runner: &'a dyn CommandRunner,
    pub config: &'a ProbeConfig,
}

impl<'a> DefaultInferencer<'a> {
    /// fact 명령으로 CPU 코어 수를 얻어 기본값 공식을 적용한다.
    /// 명령이 없거나 실패하면 이 종류의 서비스도 동작 중일 수 없으므로 값 없음으로 본다.
    pub async fn infer(&self) -> Result<String, LookupMiss> {
        let cfg = self.config;
        if !self.runner.exists(&cfg.facts_command) {
            return Err(LookupMiss::DependencyAbsent(format!(
                "'{}' not found",
                cfg.facts_command
            )));
        }

        let output = self
            .runner
            .run(&cfg.facts_command, &cfg.facts_args, cfg.facts_timeout())
            .await
            .map_err(|err| LookupMiss::DependencyAbsent(format!("{err:#}")))?;

        let trimmed = output.trim();
        if trimmed.is_empty() {
            return Err(LookupMiss::DependencyAbsent(format!(
                "'{}' printed nothing",
                cfg.facts_command
            )));
        }

        let cores: i64 = trimmed.parse().map_err(|_| {
            LookupMiss::DependencyAbsent(format!("unexpected processor count '{trimmed}'"))
        })?;
        debug!(cores, "processor count from facts");

        Ok(jruby_instances_for(cores, cfg.inference_min, cfg.inference_max).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRunner;

    async fn infer_with(runner: &FakeRunner) -> Result<String, LookupMiss> {
        let config = ProbeConfig::default();
        DefaultInferencer {
            runner,
            config: &config,
        }
        .infer()
        .await
    }

    #[tokio::test]
    async fn clamps_core_count() {
        for (cores, expected) in [
            ("1", "1"),
            ("3", "2"),
            ("5", "4"),
            ("0", "1"),
            ("-2", "1"),
            ("-9223372036854775808", "1"),
            ("9223372036854775807", "4"),
        ] {
            let runner = FakeRunner::printing(cores);
            assert_eq!(infer_with(&runner).await.unwrap(), expected, "cores={cores}");
        }
    }

    #[tokio::test]
    async fn missing_command_is_dependency_absent() {
        let runner = FakeRunner::missing();
        assert!(matches!(
            infer_with(&runner).await,
            Err(LookupMiss::DependencyAbsent(_))
        ));
        assert_eq!(runner.calls(), 0);
    }

    #[tokio::test]
    async fn failed_or_empty_output_is_dependency_absent() {
        for runner in [
            FakeRunner::failing("timed out"),
            FakeRunner::printing("  \n"),
            FakeRunner::printing("eight"),
        ] {
            assert!(matches!(
                infer_with(&runner).await,
                Err(LookupMiss::DependencyAbsent(_))
            ));
        }
    }

    #[tokio::test]
    async fn passes_configured_command_and_args() {
        let runner = FakeRunner::printing("8");
        infer_with(&runner).await.unwrap();
        assert_eq!(
            runner.last_invocation(),
            Some((
                "/opt/puppetlabs/bin/facter".to_string(),
                vec!["processors.count".to_string()]
            ))
        );
    }
}
