//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod local_fs;
mod process_runner;
mod report_sink;

pub use config_repository::JsonConfigRepository;
pub use local_fs::LocalFileSystem;
pub use process_runner::TokioCommandRunner;
pub use report_sink::ConsoleFileSink;
