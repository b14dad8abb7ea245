//! Interface layer
//! CLI 입력 해석과 실행 의존성 조립을 담당한다.

pub mod cli;
pub mod composition;
