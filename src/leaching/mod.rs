//! 페로브스카이트 PV 패널 주변 토양의 납(Pb) 오염 추정 모듈 모음.
//! 질량수지 → 확산 기하 → 농도 순의 계산 체인과 참고용 정적 테이블로 구성한다.

pub mod calculator;
pub mod derivation;
pub mod materials;
pub mod thresholds;

pub use calculator::*;
pub use derivation::*;
pub use thresholds::{classify, GuidanceLevel};
