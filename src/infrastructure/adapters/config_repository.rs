//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::{ProbeConfig, ToolConfig};
use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// 레이어드 JSON 설정 + CLI 덮어쓰기 값을 합치는 저장소 어댑터.
#[derive(Default)]
pub struct JsonConfigRepository {
    /// 모든 파일 레이어 뒤에 병합되는 값(CLI 플래그)
    pub overrides: ToolConfig,
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<ProbeConfig> {
        config::load_probe_config(&self.overrides)
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        config::inspect_pretty_json(&self.overrides)
    }
}
