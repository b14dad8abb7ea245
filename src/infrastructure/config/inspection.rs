//! 적용 설정 진단(inspection) 뷰 모델.

use std::path::Path;

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::command_exists;
use crate::application::config::{ProbeConfig, ToolConfig};
use crate::application::extract::{ConfigFileLocator, JavaArgsReader, OsFamily};
use crate::application::ports::FileSystem;
use crate::domain::parameter::SourceKind;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub effective: ProbeConfig,
    pub sources: SourcesInspection,
    pub facts: FactsInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourcesInspection {
    pub service_conf: PathInspection,
    pub data_service_conf: PathInspection,
    /// glob 후보가 없으면 `null`
    pub database_conf: Option<PathInspection>,
    pub os_family: OsFamily,
    pub startup_args_dir: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathInspection {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactsInspection {
    pub command: String,
    pub args: Vec<String>,
    pub command_available: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(
        mut loaded: LoadedConfig,
        overrides: &ToolConfig,
        fs: &dyn FileSystem,
    ) -> Self {
        loaded.config.merge_from(overrides.clone());
        let effective = loaded.config.resolve();

        let locator = ConfigFileLocator {
            fs,
            config: &effective,
        };
        let reader = JavaArgsReader {
            fs,
            config: &effective,
        };

        let sources = SourcesInspection {
            service_conf: path_inspection(fs, &effective.host_path(&effective.service_conf)),
            data_service_conf: path_inspection(
                fs,
                &effective.host_path(&effective.data_service_conf),
            ),
            database_conf: locator
                .locate(SourceKind::DatabaseConf)
                .ok()
                .map(|source| path_inspection(fs, &source.path)),
            os_family: reader.os_family(),
            startup_args_dir: reader.defaults_dir().display().to_string(),
        };

        let facts = FactsInspection {
            command: effective.facts_command.clone(),
            args: effective.facts_args.clone(),
            command_available: command_exists(&effective.facts_command),
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective,
            sources,
            facts,
        }
    }
}

fn path_inspection(fs: &dyn FileSystem, path: &Path) -> PathInspection {
    PathInspection {
        path: path.display().to_string(),
        exists: fs.is_file(path),
    }
}
