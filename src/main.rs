//! `tuneprobe` 바이너리 진입점.

use tuneprobe::interface::cli::{Cli, CliAction};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 보고서는 stdout, 로그는 stderr로 분리한다.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let result = match Cli::parse_action() {
        CliAction::InspectConfig(overrides) => {
            tuneprobe::inspect_config_pretty_json(overrides).map(|json| println!("{json}"))
        }
        // 보고서 stdout 출력은 sink가 담당한다.
        CliAction::Collect(overrides) => tuneprobe::run(overrides).await.map(|_| ()),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
