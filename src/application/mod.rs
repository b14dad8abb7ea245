//! Application layer
//! 설정 조회 유스케이스와 포트(추상 인터페이스), 값 추출 컴포넌트를 정의한다.

pub mod config;
pub mod extract;
pub mod ports;
pub mod usecases;
