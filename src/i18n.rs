use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const YES_NO_HINT: &str = "general.yes_no_hint";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPUTE: &str = "main_menu.compute";
    pub const MAIN_MENU_DERIVE: &str = "main_menu.derive";
    pub const MAIN_MENU_TABLES: &str = "main_menu.tables";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const COMPUTE_HEADING: &str = "compute.heading";
    pub const SECTION_PANEL: &str = "compute.section_panel";
    pub const SECTION_SOIL: &str = "compute.section_soil";
    pub const PROMPT_PANEL_SURFACE: &str = "prompt.panel_surface";
    pub const PROMPT_PB_CONCENTRATION: &str = "prompt.pb_concentration";
    pub const PROMPT_LEACHED: &str = "prompt.leached";
    pub const PROMPT_DISTANCE: &str = "prompt.distance";
    pub const PROMPT_DEPTH: &str = "prompt.depth";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_SORPTION: &str = "prompt.sorption";
    pub const PROMPT_INCLUDE_BELOW_PANEL: &str = "prompt.include_below_panel";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_TOTAL_PB: &str = "result.total_pb";
    pub const RESULT_SORBED_PB: &str = "result.sorbed_pb";
    pub const RESULT_SOIL_VOLUME: &str = "result.soil_volume";
    pub const RESULT_SOIL_MASS: &str = "result.soil_mass";
    pub const RESULT_CONCENTRATION: &str = "result.concentration";
    pub const RESULT_PEAK_LEVEL: &str = "result.peak_level";
    pub const RESULT_FOOTPRINT: &str = "result.footprint";
    pub const FOOTPRINT_EXCLUDED: &str = "footprint.excluded";
    pub const FOOTPRINT_INCLUDED: &str = "footprint.included";

    pub const SERIES_HEADING: &str = "series.heading";
    pub const SERIES_DISTANCE: &str = "series.distance";
    pub const SERIES_SURFACE: &str = "series.surface";
    pub const SERIES_MASS: &str = "series.mass";
    pub const SERIES_CONCENTRATION: &str = "series.concentration";

    pub const LEVEL_BELOW_RECOMMENDED: &str = "level.below_recommended";
    pub const LEVEL_ABOVE_RECOMMENDED: &str = "level.above_recommended";
    pub const LEVEL_ABOVE_LIMIT: &str = "level.above_limit";
    pub const LEVEL_REMEDIATION: &str = "level.remediation";

    pub const GUIDANCE_HEADING: &str = "guidance.heading";
    pub const GUIDANCE_RECOMMENDED: &str = "guidance.recommended";
    pub const GUIDANCE_LIMIT: &str = "guidance.limit";
    pub const GUIDANCE_REMEDIATION: &str = "guidance.remediation";

    pub const DERIVE_HEADING: &str = "derive.heading";
    pub const PROMPT_THICKNESS: &str = "prompt.thickness";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const DERIVE_RESULT: &str = "derive.result";
    pub const DERIVE_USE_AS_DEFAULT: &str = "derive.use_as_default";
    pub const DERIVE_APPLIED: &str = "derive.applied";

    pub const MATERIALS_HEADING: &str = "tables.materials_heading";
    pub const SOILS_HEADING: &str = "tables.soils_heading";
    pub const COL_MATERIAL: &str = "tables.col_material";
    pub const COL_PB_DENSITY: &str = "tables.col_pb_density";
    pub const COL_SOIL: &str = "tables.col_soil";
    pub const COL_DENSITY_RANGE: &str = "tables.col_density_range";
    pub const COL_TYPICAL: &str = "tables.col_typical";
    pub const COL_NOTES: &str = "tables.col_notes";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 지정 디렉터리, locales/ 순으로 찾고 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 한국어 문자열이 없으면 영어로, 그것도 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. `[section] key = "value"` 형태를 `section.key`로 편다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{}.toml", Language::from_code(lang).as_code()));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    walk("", &value, &mut map);
    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        YES_NO_HINT => "(y/n)",
        MAIN_MENU_TITLE => "\n=== 페로브스카이트 납 용출 계산기 ===",
        MAIN_MENU_COMPUTE => "1) 토양 납 농도 계산",
        MAIN_MENU_DERIVE => "2) 흡수층 두께로 납 함량 추정",
        MAIN_MENU_TABLES => "3) 참고 테이블",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        COMPUTE_HEADING => "\n-- 토양 납 농도 계산 --",
        SECTION_PANEL => "[패널 납 함량]",
        SECTION_SOIL => "[고려하는 토양 부피/질량]",
        PROMPT_PANEL_SURFACE => "PV 면적 [m2]",
        PROMPT_PB_CONCENTRATION => "납 함량 [g/m2]",
        PROMPT_LEACHED => "납 용출률 [0-100]",
        PROMPT_DISTANCE => "PV 주변 최대 확산 거리 [m]",
        PROMPT_DEPTH => "최대 토양 깊이 [m]",
        PROMPT_DENSITY => "토양 밀도 [kg/m3]",
        PROMPT_SORPTION => "토양 흡착률 [0-100]",
        PROMPT_INCLUDE_BELOW_PANEL => "패널 아래 면적 포함",
        RESULT_HEADING => "\n결과:",
        RESULT_TOTAL_PB => "패널 내 총 납",
        RESULT_SORBED_PB => "토양 흡착 납",
        RESULT_SOIL_VOLUME => "PV 주변 토양 부피",
        RESULT_SOIL_MASS => "PV 주변 토양 질량",
        RESULT_CONCENTRATION => "토양 납 농도",
        RESULT_PEAK_LEVEL => "최고 농도 구간",
        RESULT_FOOTPRINT => "영향 면적",
        FOOTPRINT_EXCLUDED => "패널 주변만",
        FOOTPRINT_INCLUDED => "패널 아래 포함",
        SERIES_HEADING => "\n확산 거리별 납 농도:",
        SERIES_DISTANCE => "거리 [m]",
        SERIES_SURFACE => "면적 [m2]",
        SERIES_MASS => "토양 [kg]",
        SERIES_CONCENTRATION => "농도 [mg/kg]",
        LEVEL_BELOW_RECOMMENDED => "SCAHT 권고값 이하",
        LEVEL_ABOVE_RECOMMENDED => "SCAHT 권고값 초과",
        LEVEL_ABOVE_LIMIT => "FOEN 권고 최대값 초과",
        LEVEL_REMEDIATION => "FOEN 정화 기준 이상",
        GUIDANCE_HEADING => "\n참고 기준:",
        GUIDANCE_RECOMMENDED => "권고 최대값",
        GUIDANCE_LIMIT => "권고 최대값",
        GUIDANCE_REMEDIATION => "정화 조치 기준",
        DERIVE_HEADING => "\n-- 흡수층 두께로 납 함량 추정 --",
        PROMPT_THICKNESS => "흡수층 두께 [nm] (1-1000)",
        PROMPT_MATERIAL => "재료",
        DERIVE_RESULT => "추정 납 함량",
        DERIVE_USE_AS_DEFAULT => "이번 세션의 납 함량 기본값으로 사용",
        DERIVE_APPLIED => "납 함량 기본값을 변경했습니다.",
        MATERIALS_HEADING => "\n흡수층 재료:",
        SOILS_HEADING => "\n토양 종류별 밀도:",
        COL_MATERIAL => "재료",
        COL_PB_DENSITY => "Pb 밀도 [g/cm3]",
        COL_SOIL => "토양",
        COL_DENSITY_RANGE => "밀도 [kg/m3]",
        COL_TYPICAL => "대표값",
        COL_NOTES => "비고",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정",
        SETTINGS_OPTIONS => "1) 언어  2) 영향 면적 모드  3) 기본 입력값  (취소하려면 엔터)",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/en/ko): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        YES_NO_HINT => "(y/n)",
        MAIN_MENU_TITLE => "\n=== Perovskite Leaching Tool ===",
        MAIN_MENU_COMPUTE => "1) Soil Pb concentration",
        MAIN_MENU_DERIVE => "2) Pb content from layer thickness",
        MAIN_MENU_TABLES => "3) Reference tables",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        COMPUTE_HEADING => "\n-- Soil Pb concentration --",
        SECTION_PANEL => "[Lead content in panel]",
        SECTION_SOIL => "[Volume/mass of soil considered]",
        PROMPT_PANEL_SURFACE => "PV surface [m2]",
        PROMPT_PB_CONCENTRATION => "Pb concentration [g/m2]",
        PROMPT_LEACHED => "Pb leaching ratio [0-100]",
        PROMPT_DISTANCE => "Max Pb spreading distance around PV [m]",
        PROMPT_DEPTH => "Max soil depth [m]",
        PROMPT_DENSITY => "Soil density [kg/m3]",
        PROMPT_SORPTION => "Soil sorption ratio [0-100]",
        PROMPT_INCLUDE_BELOW_PANEL => "Include area below panel",
        RESULT_HEADING => "\nResults:",
        RESULT_TOTAL_PB => "Total Pb in panels",
        RESULT_SORBED_PB => "Total Pb sorbed in soil",
        RESULT_SOIL_VOLUME => "Soil volume around PV",
        RESULT_SOIL_MASS => "Soil mass around PV",
        RESULT_CONCENTRATION => "Pb mass concentration in soil",
        RESULT_PEAK_LEVEL => "Peak concentration level",
        RESULT_FOOTPRINT => "Affected area",
        FOOTPRINT_EXCLUDED => "around panel only",
        FOOTPRINT_INCLUDED => "including area below panel",
        SERIES_HEADING => "\nPb concentration by spreading distance:",
        SERIES_DISTANCE => "Distance [m]",
        SERIES_SURFACE => "Area [m2]",
        SERIES_MASS => "Soil [kg]",
        SERIES_CONCENTRATION => "Pb [mg/kg]",
        LEVEL_BELOW_RECOMMENDED => "below SCAHT recommended value",
        LEVEL_ABOVE_RECOMMENDED => "above SCAHT recommended value",
        LEVEL_ABOVE_LIMIT => "above FOEN max limit",
        LEVEL_REMEDIATION => "at or above FOEN remediation threshold",
        GUIDANCE_HEADING => "\nReference values:",
        GUIDANCE_RECOMMENDED => "recommended max value",
        GUIDANCE_LIMIT => "recommended max value",
        GUIDANCE_REMEDIATION => "threshold for remediation",
        DERIVE_HEADING => "\n-- Pb content from layer thickness --",
        PROMPT_THICKNESS => "Perovskite layer thickness [nm] (1-1000)",
        PROMPT_MATERIAL => "Material",
        DERIVE_RESULT => "Estimated Pb concentration",
        DERIVE_USE_AS_DEFAULT => "Use as Pb concentration default for this session",
        DERIVE_APPLIED => "Pb concentration default updated.",
        MATERIALS_HEADING => "\nAbsorber materials:",
        SOILS_HEADING => "\nSoil bulk densities:",
        COL_MATERIAL => "Material",
        COL_PB_DENSITY => "Pb density [g/cm3]",
        COL_SOIL => "Soil",
        COL_DENSITY_RANGE => "Density [kg/m3]",
        COL_TYPICAL => "Typical",
        COL_NOTES => "Notes",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings",
        SETTINGS_OPTIONS => "1) Language  2) Affected area mode  3) Default inputs  (Enter to cancel)",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/en/ko): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
