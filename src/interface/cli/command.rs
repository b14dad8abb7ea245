//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::config::{OutputConfig, ToolConfig};

#[derive(Debug, Parser)]
#[command(name = "tuneprobe")]
#[command(about = "Report the tuning values currently in effect on this host")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read host configuration under this directory instead of /
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Directory the report file is written to
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Fail when an input file exists but cannot be read
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the effective tool config and resolved host paths
    Config,
}

pub enum CliAction {
    Collect(ToolConfig),
    InspectConfig(ToolConfig),
}

impl Cli {
    /// 인자 오류/도움말은 clap이 직접 출력하고 종료한다.
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        let overrides = ToolConfig {
            root: self.root,
            output: OutputConfig {
                dir: self.output_dir,
                file: None,
            },
            // 플래그가 없으면 설정 파일 값을 유지한다.
            strict: self.strict.then_some(true),
            ..Default::default()
        };

        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig(overrides),
            None => CliAction::Collect(overrides),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> CliAction {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn default_action_collects_without_overrides() {
        let CliAction::Collect(overrides) = action(&["tuneprobe"]) else {
            panic!("expected collect action");
        };
        assert!(overrides.root.is_none());
        assert!(overrides.output.dir.is_none());
        assert_eq!(overrides.strict, None);
    }

    #[test]
    fn flags_become_overrides() {
        let CliAction::Collect(overrides) = action(&[
            "tuneprobe",
            "--root",
            "/mnt/host",
            "--output-dir",
            "/tmp/report",
            "--strict",
        ]) else {
            panic!("expected collect action");
        };
        assert_eq!(overrides.root, Some(PathBuf::from("/mnt/host")));
        assert_eq!(overrides.output.dir, Some(PathBuf::from("/tmp/report")));
        assert_eq!(overrides.strict, Some(true));
    }

    #[test]
    fn config_subcommand_inspects() {
        assert!(matches!(
            action(&["tuneprobe", "config", "--root", "/mnt/host"]),
            CliAction::InspectConfig(ToolConfig { root: Some(_), .. })
        ));
    }
}
