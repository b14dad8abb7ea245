//! Domain layer
//! 설정 값 모델/파라미터 선언/문자열 해석 규칙을 외부 I/O 없이 표현한다.

pub mod java_args;
pub mod parameter;
pub mod pattern;
pub mod policy;
pub mod settings;
