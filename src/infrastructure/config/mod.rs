//! 도구 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod utils;

use anyhow::Result;

use crate::application::config::{ProbeConfig, ToolConfig};
use crate::infrastructure::adapters::LocalFileSystem;

pub use inspection::{
    ConfigInspection, FactsInspection, PathInspection, SourcesInspection,
};
pub use loader::{CONFIG_ENV, config_paths};
pub use utils::command_exists;

/// 파일 레이어를 병합하고 마지막에 `overrides`를 덮어써 불변 설정을 확정한다.
pub fn load_probe_config(overrides: &ToolConfig) -> Result<ProbeConfig> {
    let mut merged = loader::load_merged_config()?.config;
    merged.merge_from(overrides.clone());
    Ok(merged.resolve())
}

/// 디버깅/진단용 설정 정보를 구성한다.
pub fn inspect(overrides: &ToolConfig) -> Result<ConfigInspection> {
    let loaded = loader::load_merged_config()?;
    Ok(ConfigInspection::from_loaded(loaded, overrides, &LocalFileSystem))
}

/// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json(overrides: &ToolConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&inspect(overrides)?)?)
}
