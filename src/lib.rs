//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면(UI)에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod leaching;
pub mod report;
pub mod ui_cli;
