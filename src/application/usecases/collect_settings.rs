//! 현재 적용 중인 튜닝 값을 수집해 보고서로 전달하는 유스케이스.

use std::collections::HashMap;

use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use crate::application::config::ProbeConfig;
use crate::application::extract::{
    ConfigFileLocator, DefaultInferencer, JavaArgsReader, read_source,
};
use crate::application::ports::{CommandRunner, FileSystem, ReportSink};
use crate::domain::java_args;
use crate::domain::parameter::{
    Dialect, Fallback, PARAMETERS, ParameterSpec, SourceKind, Strategy,
};
use crate::domain::pattern::extract_last;
use crate::domain::settings::{LookupMiss, ReportEntry, Setting, SettingsReport};

struct LoadedSource {
    dialect: Dialect,
    contents: String,
}

type Sources = HashMap<SourceKind, Result<LoadedSource, LookupMiss>>;

/// 선언 테이블 순서대로 값을 조회하고, 직렬화한 보고서를 콘솔/파일로 내보낸다.
pub struct CollectSettingsUseCase<'a> {
    pub config: &'a ProbeConfig,
    pub fs: &'a dyn FileSystem,
    pub runner: &'a dyn CommandRunner,
    pub sink: &'a dyn ReportSink,
}

impl<'a> CollectSettingsUseCase<'a> {
    /// 보고서를 만들고 전달한 뒤 같은 JSON 문자열을 반환한다.
    /// 조회 실패는 `NotAvailable`로 흡수되고, 전달 실패만 오류가 된다.
    pub async fn execute(&self) -> Result<String> {
        let report = self.collect().await?;
        let text = report.to_pretty_json()?;
        let path = self.sink.deliver(&text)?;
        info!(
            path = %path.display(),
            available = report.available_count(),
            total = report.len(),
            "settings report written"
        );
        Ok(text)
    }

    /// 선언된 모든 파라미터를 정확히 한 번씩 담은 보고서를 만든다.
    pub async fn collect(&self) -> Result<SettingsReport> {
        let sources = self.load_sources();
        let mut report = SettingsReport::new();
        for spec in PARAMETERS {
            let entry = self.entry_for(spec, &sources).await?;
            report.insert(spec.name, entry);
        }
        Ok(report)
    }

    fn load_sources(&self) -> Sources {
        let locator = ConfigFileLocator {
            fs: self.fs,
            config: self.config,
        };

        SourceKind::ALL
            .into_iter()
            .map(|kind| {
                let loaded = locator.locate(kind).and_then(|source| {
                    let contents = read_source(self.fs, &source.path)?;
                    debug!(?kind, path = %source.path.display(), "config source loaded");
                    Ok(LoadedSource {
                        dialect: source.dialect,
                        contents,
                    })
                });
                (kind, loaded)
            })
            .collect()
    }

    async fn entry_for(&self, spec: &ParameterSpec, sources: &Sources) -> Result<ReportEntry> {
        match spec.strategy {
            Strategy::Pattern {
                source,
                key,
                fallback,
            } => {
                let lookup = match sources.get(&source) {
                    Some(Ok(loaded)) => extract_last(&loaded.contents, key, loaded.dialect)
                        .ok_or_else(|| LookupMiss::NoMatch {
                            key: key.to_string(),
                        }),
                    Some(Err(miss)) => Err(miss.clone()),
                    None => Err(LookupMiss::NoMatch {
                        key: key.to_string(),
                    }),
                };

                let lookup = match (lookup, fallback) {
                    (Err(miss), Some(Fallback::ProcessorCount)) => {
                        self.tolerate(spec.name, &miss)?;
                        debug!(parameter = spec.name, %miss, "no explicit value, inferring default");
                        self.inferencer().infer().await
                    }
                    (lookup, _) => lookup,
                };

                Ok(ReportEntry::Scalar(self.settle(spec.name, lookup)?))
            }
            Strategy::JavaArgs { service } => {
                let reader = JavaArgsReader {
                    fs: self.fs,
                    config: self.config,
                };
                match reader.read(service) {
                    Ok(raw) => {
                        debug!(parameter = spec.name, args = %raw, "java args found");
                        Ok(ReportEntry::JavaArgs(java_args::parse(&raw)))
                    }
                    Err(miss) => Ok(ReportEntry::Scalar(self.settle(spec.name, Err(miss))?)),
                }
            }
        }
    }

    fn inferencer(&self) -> DefaultInferencer<'_> {
        DefaultInferencer {
            runner: self.runner,
            config: self.config,
        }
    }

    fn settle(&self, name: &str, lookup: Result<String, LookupMiss>) -> Result<Setting> {
        match lookup {
            Ok(value) => {
                debug!(parameter = name, %value, "resolved");
                Ok(Setting::Value(value))
            }
            Err(miss) => {
                self.tolerate(name, &miss)?;
                debug!(parameter = name, %miss, "not available");
                Ok(Setting::NotAvailable)
            }
        }
    }

    /// 읽기 불가 소스는 strict 모드에서만 치명적이다.
    fn tolerate(&self, name: &str, miss: &LookupMiss) -> Result<()> {
        if let LookupMiss::SourceUnreadable { .. } = miss {
            if self.config.strict {
                bail!("{name}: {miss}");
            }
            warn!(parameter = name, %miss, "treating unreadable source as not available");
        }
        Ok(())
    }
}
