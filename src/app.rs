use std::path::Path;

use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::leaching::{calculator, derivation};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 누출 계산 입력 오류
    Leaching(calculator::LeachingError),
    /// 납 함량 추정 오류
    Derivation(derivation::DerivationError),
}

impl AppError {
    /// 입력값 문제라서 메뉴로 돌아가 다시 시도할 수 있는 오류인지.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::Leaching(_) | AppError::Derivation(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Leaching(e) => write!(f, "{e}"),
            AppError::Derivation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<calculator::LeachingError> for AppError {
    fn from(value: calculator::LeachingError) -> Self {
        AppError::Leaching(value)
    }
}

impl From<derivation::DerivationError> for AppError {
    fn from(value: derivation::DerivationError) -> Self {
        AppError::Derivation(value)
    }
}

/// 설정의 언어와 CLI 플래그로 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: &str) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 세션 기본값은 설정의 기본 입력값에서 시작하며, 납 함량 추정 결과를 적용해도
/// 설정 파일에는 저장하지 않는다. 파일은 설정 메뉴에서 값을 바꿨을 때만 쓴다.
pub fn run(config: &mut Config, config_path: &Path, cli_lang: &str) -> Result<(), AppError> {
    let mut tr = translator_for(config, cli_lang);
    let mut session = config.defaults;
    loop {
        let outcome = match ui_cli::main_menu(&tr)? {
            MenuChoice::Compute => ui_cli::handle_compute(&tr, &session),
            MenuChoice::DeriveConcentration => ui_cli::handle_derive(&tr, &mut session),
            MenuChoice::ReferenceTables => {
                ui_cli::handle_tables(&tr);
                Ok(())
            }
            MenuChoice::Settings => match ui_cli::handle_settings(&tr, config) {
                Ok(true) => {
                    config.save_to(config_path)?;
                    session = config.defaults;
                    // 언어가 바뀌었을 수 있으므로 CLI 플래그 대신 설정값으로 다시 만든다.
                    tr = translator_for(config, "auto");
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                    Ok(())
                }
                other => other.map(|_| ()),
            },
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(e) if e.is_input_error() => eprintln!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            other => other?,
        }
    }
    Ok(())
}
