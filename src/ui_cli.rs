use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::leaching::materials::{self, find_material};
use crate::leaching::{self, LeachingInputs, PanelFootprint};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compute,
    DeriveConcentration,
    ReferenceTables,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPUTE));
    println!("{}", tr.t(keys::MAIN_MENU_DERIVE));
    println!("{}", tr.t(keys::MAIN_MENU_TABLES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compute),
            "2" => return Ok(MenuChoice::DeriveConcentration),
            "3" => return Ok(MenuChoice::ReferenceTables),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 입력 폼을 받아 토양 납 농도를 계산하고 결과 표를 출력한다.
pub fn handle_compute(tr: &Translator, defaults: &LeachingInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPUTE_HEADING));
    let input = prompt_inputs(tr, defaults)?;
    let result = leaching::compute_leaching(input)?;
    print!("{}", report::summary_table(tr, &result, input.footprint));
    print!("{}", report::series_table(tr, &result));
    print!("{}", report::guidance_lines(tr));
    Ok(())
}

/// 누출 계산 입력값을 차례로 묻는다. 빈 입력은 기본값을 유지한다.
pub fn prompt_inputs(tr: &Translator, defaults: &LeachingInputs) -> Result<LeachingInputs, AppError> {
    println!("{}", tr.t(keys::SECTION_PANEL));
    let panel_surface_m2 = read_f64_or(tr, keys::PROMPT_PANEL_SURFACE, defaults.panel_surface_m2)?;
    let pb_concentration_g_per_m2 =
        read_f64_or(tr, keys::PROMPT_PB_CONCENTRATION, defaults.pb_concentration_g_per_m2)?;
    let leached_percent = read_f64_or(tr, keys::PROMPT_LEACHED, defaults.leached_percent)?;
    println!("{}", tr.t(keys::SECTION_SOIL));
    let spread_distance_m = read_f64_or(tr, keys::PROMPT_DISTANCE, defaults.spread_distance_m)?;
    let soil_depth_m = read_f64_or(tr, keys::PROMPT_DEPTH, defaults.soil_depth_m)?;
    let soil_density_kg_per_m3 =
        read_f64_or(tr, keys::PROMPT_DENSITY, defaults.soil_density_kg_per_m3)?;
    let sorption_percent = read_f64_or(tr, keys::PROMPT_SORPTION, defaults.sorption_percent)?;
    let include = read_yes_no(
        tr,
        keys::PROMPT_INCLUDE_BELOW_PANEL,
        defaults.footprint == PanelFootprint::IncludePanelFootprint,
    )?;
    Ok(LeachingInputs {
        panel_surface_m2,
        pb_concentration_g_per_m2,
        leached_percent,
        spread_distance_m,
        soil_depth_m,
        soil_density_kg_per_m3,
        sorption_percent,
        footprint: footprint_from_flag(include),
    })
}

/// 흡수층 두께로 납 함량을 추정한다. 원하면 이번 세션의 기본값으로 쓴다.
pub fn handle_derive(tr: &Translator, session: &mut LeachingInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DERIVE_HEADING));
    let thickness_nm = read_f64_or(tr, keys::PROMPT_THICKNESS, 200.0)?;
    let keys_hint = materials::materials()
        .iter()
        .map(|m| m.key)
        .collect::<Vec<_>>()
        .join("/");
    let default_key = materials::materials().first().map(|m| m.key).unwrap_or_default();
    let entered = read_line(&format!(
        "{} ({keys_hint}) [{default_key}]: ",
        tr.t(keys::PROMPT_MATERIAL)
    ))?;
    let key = match entered.trim() {
        "" => default_key,
        other => other,
    };
    let material = find_material(key)
        .ok_or_else(|| leaching::DerivationError::UnknownMaterial(key.to_string()))?;
    let concentration = leaching::derive_concentration_for(thickness_nm, material)?;
    println!(
        "{}: {concentration:.3} g/m2 ({}, {thickness_nm} nm)",
        tr.t(keys::DERIVE_RESULT),
        material.key
    );
    if read_yes_no(tr, keys::DERIVE_USE_AS_DEFAULT, false)? {
        session.pb_concentration_g_per_m2 = concentration;
        println!("{}", tr.t(keys::DERIVE_APPLIED));
    }
    Ok(())
}

pub fn handle_tables(tr: &Translator) {
    print!("{}", report::reference_tables(tr));
    print!("{}", report::guidance_lines(tr));
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: language={}, {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        report::footprint_label(tr, cfg.defaults.footprint)
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match lang.trim().to_lowercase().as_str() {
                code @ ("auto" | "en" | "ko") => {
                    cfg.language = code.to_string();
                    Ok(true)
                }
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    Ok(false)
                }
            }
        }
        "2" => {
            let include = read_yes_no(
                tr,
                keys::PROMPT_INCLUDE_BELOW_PANEL,
                cfg.defaults.footprint == PanelFootprint::IncludePanelFootprint,
            )?;
            cfg.defaults.footprint = footprint_from_flag(include);
            Ok(true)
        }
        "3" => {
            let input = prompt_inputs(tr, &cfg.defaults)?;
            // 저장 전에 검사해 계산 불가능한 기본값이 남지 않게 한다.
            input.validate()?;
            cfg.defaults = input;
            Ok(true)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

fn footprint_from_flag(include_area_below_panel: bool) -> PanelFootprint {
    if include_area_below_panel {
        PanelFootprint::IncludePanelFootprint
    } else {
        PanelFootprint::ExcludePanelFootprint
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(buf)
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    let prompt = format!("{} [{default}]: ", tr.t(key));
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(tr: &Translator, key: &str, default: bool) -> Result<bool, AppError> {
    let current = if default { "y" } else { "n" };
    let prompt = format!("{} {} [{current}]: ", tr.t(key), tr.t(keys::YES_NO_HINT));
    loop {
        let s = read_line(&prompt)?;
        match s.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
