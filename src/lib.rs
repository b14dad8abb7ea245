//! tuneprobe library root.
//! 호스트 설정 파일에서 현재 적용 중인 튜닝 값을 읽어 정규화된 보고서를 만든다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

#[cfg(test)]
mod testing;

use application::config::ToolConfig;
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 실행 함수. 보고서 JSON 문자열을 반환한다.
pub async fn run(overrides: ToolConfig) -> Result<String> {
    let composition = AppComposition::load(overrides)?;
    composition.collect_settings_usecase().execute().await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(overrides: ToolConfig) -> Result<String> {
    let composition = AppComposition::load(overrides)?;
    composition.inspect_config_usecase().execute()
}
