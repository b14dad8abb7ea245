//! 애플리케이션 유스케이스 모음.

pub mod collect_settings;
pub mod inspect_config;
