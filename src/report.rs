//! 계산 결과와 참고 테이블을 터미널 출력용 문자열로 만든다.
//! 숫자는 소수점 셋째 자리까지 표시한다.

use std::fmt::Write;

use crate::i18n::{keys, Translator};
use crate::leaching::materials::{materials, soil_types};
use crate::leaching::thresholds::GUIDANCE_THRESHOLDS;
use crate::leaching::{GuidanceLevel, LeachingResult, PanelFootprint};

pub fn level_label(tr: &Translator, level: GuidanceLevel) -> &str {
    let key = match level {
        GuidanceLevel::BelowRecommended => keys::LEVEL_BELOW_RECOMMENDED,
        GuidanceLevel::AboveRecommended => keys::LEVEL_ABOVE_RECOMMENDED,
        GuidanceLevel::AboveLimit => keys::LEVEL_ABOVE_LIMIT,
        GuidanceLevel::RemediationRequired => keys::LEVEL_REMEDIATION,
    };
    tr.t(key)
}

pub fn footprint_label(tr: &Translator, footprint: PanelFootprint) -> &str {
    match footprint {
        PanelFootprint::ExcludePanelFootprint => tr.t(keys::FOOTPRINT_EXCLUDED),
        PanelFootprint::IncludePanelFootprint => tr.t(keys::FOOTPRINT_INCLUDED),
    }
}

/// 터미널 표시 폭. 한글/CJK 전각 문자는 두 칸을 차지한다.
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFF00..=0xFF60 => 2,
            _ => 1,
        })
        .sum()
}

/// 요약 표: 총 납, 흡착 납, 배율 1.0 지점의 토양 부피/질량/농도.
pub fn summary_table(tr: &Translator, result: &LeachingResult, footprint: PanelFootprint) -> String {
    let s = result.summary();
    let rows = [
        (tr.t(keys::RESULT_TOTAL_PB), format!("{:.3} g", result.total_pb_g)),
        (tr.t(keys::RESULT_SORBED_PB), format!("{:.3} g", result.sorbed_pb_g())),
        (tr.t(keys::RESULT_SOIL_VOLUME), format!("{:.3} m3", s.soil_volume_m3)),
        (tr.t(keys::RESULT_SOIL_MASS), format!("{:.3} kg", s.soil_mass_kg)),
        (
            tr.t(keys::RESULT_CONCENTRATION),
            format!("{:.3} mg/kg", s.concentration_mg_per_kg),
        ),
        (
            tr.t(keys::RESULT_PEAK_LEVEL),
            level_label(tr, result.peak_level()).to_string(),
        ),
        (
            tr.t(keys::RESULT_FOOTPRINT),
            footprint_label(tr, footprint).to_string(),
        ),
    ];
    let width = rows.iter().map(|(label, _)| display_width(label)).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RESULT_HEADING));
    for (label, value) in rows {
        let pad = width - display_width(label);
        let _ = writeln!(out, "  {label}{:pad$} : {value}", "");
    }
    out
}

/// 거리별 시리즈 표. 그래프 대신 출력한다.
pub fn series_table(tr: &Translator, result: &LeachingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::SERIES_HEADING));
    let _ = writeln!(
        out,
        "  {:>14} {:>14} {:>14} {:>14}",
        tr.t(keys::SERIES_DISTANCE),
        tr.t(keys::SERIES_SURFACE),
        tr.t(keys::SERIES_MASS),
        tr.t(keys::SERIES_CONCENTRATION)
    );
    for p in &result.points {
        let _ = writeln!(
            out,
            "  {:>14.3} {:>14.3} {:>14.3} {:>14.3}",
            p.distance_m, p.affected_surface_m2, p.soil_mass_kg, p.concentration_mg_per_kg
        );
    }
    out
}

pub fn guidance_lines(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::GUIDANCE_HEADING));
    for t in GUIDANCE_THRESHOLDS {
        let label = match t.level {
            GuidanceLevel::RemediationRequired => tr.t(keys::GUIDANCE_REMEDIATION),
            GuidanceLevel::AboveLimit => tr.t(keys::GUIDANCE_LIMIT),
            _ => tr.t(keys::GUIDANCE_RECOMMENDED),
        };
        let _ = writeln!(out, "  {} {label} : {}mg/kg", t.authority, t.value_mg_per_kg);
    }
    out
}

/// 재료 테이블과 토양 밀도 테이블.
pub fn reference_tables(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::MATERIALS_HEADING));
    let _ = writeln!(
        out,
        "  {:<10} {:<30} {:>18}  {}",
        tr.t(keys::COL_MATERIAL),
        "",
        tr.t(keys::COL_PB_DENSITY),
        tr.t(keys::COL_NOTES)
    );
    for m in materials() {
        let _ = writeln!(
            out,
            "  {:<10} {:<30} {:>18.2}  {}",
            m.key, m.name, m.lead_density_g_per_cm3, m.notes
        );
    }

    let _ = writeln!(out, "{}", tr.t(keys::SOILS_HEADING));
    let _ = writeln!(
        out,
        "  {:<20} {:>16} {:>10}",
        tr.t(keys::COL_SOIL),
        tr.t(keys::COL_DENSITY_RANGE),
        tr.t(keys::COL_TYPICAL)
    );
    for soil in soil_types() {
        let range = format!(
            "{:.0} - {:.0}",
            soil.density_min_kg_per_m3, soil.density_max_kg_per_m3
        );
        let _ = writeln!(
            out,
            "  {:<20} {:>16} {:>10.0}",
            soil.name,
            range,
            soil.typical_density_kg_per_m3()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaching::{compute_leaching, LeachingInputs};

    #[test]
    fn summary_rounds_to_three_decimals() {
        let tr = Translator::new("en");
        let input = LeachingInputs {
            soil_depth_m: 0.5,
            soil_density_kg_per_m3: 3000.0,
            footprint: PanelFootprint::IncludePanelFootprint,
            ..LeachingInputs::default()
        };
        let result = compute_leaching(input).expect("valid input");
        let text = summary_table(&tr, &result, input.footprint);
        assert!(text.contains("9.000 g"), "{text}");
        assert!(text.contains("0.447 mg/kg"), "{text}");
        assert!(text.contains("including area below panel"), "{text}");
    }

    #[test]
    fn series_has_one_row_per_point() {
        let tr = Translator::new("en");
        let result = compute_leaching(LeachingInputs::default()).expect("valid input");
        let text = series_table(&tr, &result);
        // 제목 + 헤더 + 8행
        assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 10, "{text}");
    }

    #[test]
    fn guidance_lists_all_thresholds() {
        let text = guidance_lines(&Translator::new("en"));
        assert!(text.contains("SCAHT recommended max value : 83mg/kg"));
        assert!(text.contains("FOEN recommended max value : 300mg/kg"));
        assert!(text.contains("FOEN threshold for remediation : 1000mg/kg"));
    }

    #[test]
    fn reference_tables_show_notes_and_typical_density() {
        let text = reference_tables(&Translator::new("en"));
        for m in materials() {
            assert!(text.contains(m.notes), "{text}");
        }
        // Loam 1300-1500 => 대표값 1400
        let loam = text.lines().find(|l| l.trim_start().starts_with("Loam")).expect("loam row");
        assert!(loam.trim_end().ends_with("1400"), "{loam}");
    }

    #[test]
    fn korean_labels_align_by_display_width() {
        assert_eq!(display_width("Soil"), 4);
        assert_eq!(display_width("토양 납 농도"), 12);

        let tr = Translator::new("ko");
        let result = compute_leaching(LeachingInputs::default()).expect("valid input");
        let text = summary_table(&tr, &result, PanelFootprint::ExcludePanelFootprint);
        let columns: Vec<usize> = text
            .lines()
            .filter_map(|l| l.find(" : ").map(|i| display_width(&l[..i])))
            .collect();
        assert_eq!(columns.len(), 7, "{text}");
        assert!(columns.windows(2).all(|w| w[0] == w[1]), "{text}");
    }
}
