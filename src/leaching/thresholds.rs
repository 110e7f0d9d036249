//! 토양 납 농도 가이드라인 값. 계산 대상이 아니라 결과 옆에 함께 표시하는 상수이다.

/// SCAHT 권고 최대값 [mg/kg]
pub const SCAHT_RECOMMENDED_MG_PER_KG: f64 = 83.0;
/// FOEN 권고 최대값 [mg/kg]
pub const FOEN_LIMIT_MG_PER_KG: f64 = 300.0;
/// FOEN 정화(복원) 조치 기준 [mg/kg]
pub const FOEN_REMEDIATION_MG_PER_KG: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidanceThreshold {
    pub authority: &'static str,
    pub level: GuidanceLevel,
    pub value_mg_per_kg: f64,
}

/// 낮은 값부터 정렬된 가이드라인 목록.
pub const GUIDANCE_THRESHOLDS: [GuidanceThreshold; 3] = [
    GuidanceThreshold {
        authority: "SCAHT",
        level: GuidanceLevel::AboveRecommended,
        value_mg_per_kg: SCAHT_RECOMMENDED_MG_PER_KG,
    },
    GuidanceThreshold {
        authority: "FOEN",
        level: GuidanceLevel::AboveLimit,
        value_mg_per_kg: FOEN_LIMIT_MG_PER_KG,
    },
    GuidanceThreshold {
        authority: "FOEN",
        level: GuidanceLevel::RemediationRequired,
        value_mg_per_kg: FOEN_REMEDIATION_MG_PER_KG,
    },
];

/// 농도가 어느 가이드라인 구간에 속하는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GuidanceLevel {
    /// 83 mg/kg 이하
    BelowRecommended,
    /// 83 초과 ~ 300 이하
    AboveRecommended,
    /// 300 초과 ~ 1000 미만
    AboveLimit,
    /// 1000 이상
    RemediationRequired,
}

/// 농도 [mg/kg]를 가이드라인 구간으로 분류한다.
pub fn classify(concentration_mg_per_kg: f64) -> GuidanceLevel {
    if concentration_mg_per_kg >= FOEN_REMEDIATION_MG_PER_KG {
        GuidanceLevel::RemediationRequired
    } else if concentration_mg_per_kg > FOEN_LIMIT_MG_PER_KG {
        GuidanceLevel::AboveLimit
    } else if concentration_mg_per_kg > SCAHT_RECOMMENDED_MG_PER_KG {
        GuidanceLevel::AboveRecommended
    } else {
        GuidanceLevel::BelowRecommended
    }
}
