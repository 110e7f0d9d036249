use serde::{Deserialize, Serialize};

use super::thresholds::{classify, GuidanceLevel};

/// 확산 거리 시리즈의 길이.
pub const SERIES_LEN: usize = 8;

/// 입력 확산 거리에 곱하는 배율. 4번째(1.0)가 요약 지점이다.
pub const SPREAD_MULTIPLIERS: [f64; SERIES_LEN] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// 요약 결과로 보여줄 시리즈 인덱스 (배율 1.0).
pub const SUMMARY_INDEX: usize = 3;

/// 누출 계산 오류를 표현한다. 오류 시 부분 결과는 반환하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub enum LeachingError {
    /// 음수, NaN, 0 분모, 100 초과 백분율 등 잘못된 입력
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
    /// 영향 토양 면적이 0 이하가 되어 농도를 정의할 수 없음
    DegenerateGeometry {
        distance_m: f64,
        affected_surface_m2: f64,
    },
}

impl std::fmt::Display for LeachingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeachingError::InvalidInput { field, reason } => {
                write!(f, "invalid input `{field}`: {reason}")
            }
            LeachingError::DegenerateGeometry {
                distance_m,
                affected_surface_m2,
            } => write!(
                f,
                "affected soil surface is {affected_surface_m2:.3} m2 at {distance_m:.3} m; \
                 increase the spreading distance or include the area below the panel"
            ),
        }
    }
}

impl std::error::Error for LeachingError {}

/// 패널 바로 아래 토양을 영향 면적에 포함할지 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelFootprint {
    /// 패널 주변 토양만 계산 (정사각 외곽 면적 - 패널 면적)
    #[default]
    ExcludePanelFootprint,
    /// 패널 아래 토양까지 포함 (정사각 외곽 면적 전체)
    IncludePanelFootprint,
}

impl PanelFootprint {
    /// 패널 가장자리에서 `distance_m`만큼 퍼졌을 때 영향을 받는 토양 표면적 [m2].
    ///
    /// 외곽 한 변은 d + √S 이다. 제외 모드의 (d + √S)² - S 는 d(d + 2√S)로 전개해
    /// d = 0 에서 정확히 0이 되도록 한다.
    pub fn affected_surface_m2(self, distance_m: f64, panel_surface_m2: f64) -> f64 {
        let panel_side_m = panel_surface_m2.sqrt();
        match self {
            PanelFootprint::ExcludePanelFootprint => distance_m * (distance_m + 2.0 * panel_side_m),
            PanelFootprint::IncludePanelFootprint => {
                let side_m = distance_m + panel_side_m;
                side_m * side_m
            }
        }
    }
}

/// 누출 계산 입력값. 호출마다 새로 만들어 값으로 넘긴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeachingInputs {
    /// PV 패널 면적 [m2]
    pub panel_surface_m2: f64,
    /// 패널 단위 면적당 납 함량 [g/m2]
    pub pb_concentration_g_per_m2: f64,
    /// 패널에서 용출되는 납 비율 [%]
    pub leached_percent: f64,
    /// 패널 가장자리로부터 최대 확산 거리 [m]
    pub spread_distance_m: f64,
    /// 고려하는 최대 토양 깊이 [m]
    pub soil_depth_m: f64,
    /// 토양 겉보기 밀도 [kg/m3]
    pub soil_density_kg_per_m3: f64,
    /// 용출된 납 중 토양에 흡착되는 비율 [%]
    pub sorption_percent: f64,
    pub footprint: PanelFootprint,
}

impl Default for LeachingInputs {
    fn default() -> Self {
        Self {
            panel_surface_m2: 10.0,
            pb_concentration_g_per_m2: 0.9,
            leached_percent: 100.0,
            spread_distance_m: 0.5,
            soil_depth_m: 0.2,
            soil_density_kg_per_m3: 1408.0,
            sorption_percent: 100.0,
            footprint: PanelFootprint::default(),
        }
    }
}

impl LeachingInputs {
    /// 계산 전에 모든 입력을 검사한다.
    pub fn validate(&self) -> Result<(), LeachingError> {
        let fields = [
            ("panel_surface_m2", self.panel_surface_m2),
            ("pb_concentration_g_per_m2", self.pb_concentration_g_per_m2),
            ("leached_percent", self.leached_percent),
            ("spread_distance_m", self.spread_distance_m),
            ("soil_depth_m", self.soil_depth_m),
            ("soil_density_kg_per_m3", self.soil_density_kg_per_m3),
            ("sorption_percent", self.sorption_percent),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(invalid(field, "must not be negative"));
            }
        }
        for (field, value) in [
            ("leached_percent", self.leached_percent),
            ("sorption_percent", self.sorption_percent),
        ] {
            if value > 100.0 {
                return Err(invalid(field, "must be between 0 and 100"));
            }
        }
        // 토양 질량의 인자들. 0이면 농도 계산이 0으로 나누기가 된다.
        for (field, value) in [
            ("panel_surface_m2", self.panel_surface_m2),
            ("soil_depth_m", self.soil_depth_m),
            ("soil_density_kg_per_m3", self.soil_density_kg_per_m3),
        ] {
            if value == 0.0 {
                return Err(invalid(field, "must be greater than 0"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> LeachingError {
    LeachingError::InvalidInput { field, reason }
}

/// 특정 확산 거리에서의 계산값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadPoint {
    pub distance_m: f64,
    pub affected_surface_m2: f64,
    pub soil_volume_m3: f64,
    pub soil_mass_kg: f64,
    /// 모든 지점에서 같은 값 (같은 질량을 다른 토양량에 분배)
    pub sorbed_pb_g: f64,
    pub concentration_mg_per_kg: f64,
}

/// 누출 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct LeachingResult {
    pub total_pb_g: f64,
    pub points: [SpreadPoint; SERIES_LEN],
}

impl LeachingResult {
    pub fn sorbed_pb_g(&self) -> f64 {
        self.points[SUMMARY_INDEX].sorbed_pb_g
    }

    /// 배율 1.0 지점. 결과 표의 토양 부피/질량/농도로 사용한다.
    pub fn summary(&self) -> &SpreadPoint {
        &self.points[SUMMARY_INDEX]
    }

    pub fn distance_series(&self) -> [f64; SERIES_LEN] {
        self.points.map(|p| p.distance_m)
    }

    pub fn sorbed_series(&self) -> [f64; SERIES_LEN] {
        self.points.map(|p| p.sorbed_pb_g)
    }

    pub fn concentration_series(&self) -> [f64; SERIES_LEN] {
        self.points.map(|p| p.concentration_mg_per_kg)
    }

    /// 시리즈 최고 농도 [mg/kg] (가장 가까운 거리).
    pub fn peak_concentration_mg_per_kg(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.concentration_mg_per_kg)
            .fold(0.0, f64::max)
    }

    /// 최고 농도의 가이드라인 구간.
    pub fn peak_level(&self) -> GuidanceLevel {
        classify(self.peak_concentration_mg_per_kg())
    }
}

/// 패널에서 용출된 납이 주변 토양에 흡착될 때의 토양 납 농도를 계산한다.
///
/// 1. 총 용출량 = 면적 × 함량 × 용출률
/// 2. 흡착량 = 총 용출량 × 흡착률
/// 3. 거리별 영향 면적 × 깊이 × 밀도 = 토양 질량
/// 4. 농도 = 흡착량 / 토양 질량 × 1000 (g/kg → mg/kg)
pub fn compute_leaching(input: LeachingInputs) -> Result<LeachingResult, LeachingError> {
    input.validate()?;

    let total_pb_g =
        input.panel_surface_m2 * input.pb_concentration_g_per_m2 * (input.leached_percent / 100.0);
    let sorbed_pb_g = total_pb_g * (input.sorption_percent / 100.0);
    if !total_pb_g.is_finite() {
        return Err(invalid(
            "pb_concentration_g_per_m2",
            "panel surface x Pb concentration overflows",
        ));
    }

    let points = SPREAD_MULTIPLIERS.map(|multiplier| {
        let distance_m = input.spread_distance_m * multiplier;
        let affected_surface_m2 = input
            .footprint
            .affected_surface_m2(distance_m, input.panel_surface_m2);
        let soil_volume_m3 = affected_surface_m2 * input.soil_depth_m;
        SpreadPoint {
            distance_m,
            affected_surface_m2,
            soil_volume_m3,
            soil_mass_kg: soil_volume_m3 * input.soil_density_kg_per_m3,
            sorbed_pb_g,
            concentration_mg_per_kg: 0.0,
        }
    });

    if let Some(p) = points
        .iter()
        .find(|p| p.affected_surface_m2 <= 0.0 || p.soil_mass_kg <= 0.0)
    {
        return Err(LeachingError::DegenerateGeometry {
            distance_m: p.distance_m,
            affected_surface_m2: p.affected_surface_m2,
        });
    }
    if points.iter().any(|p| !p.soil_mass_kg.is_finite()) {
        return Err(invalid(
            "soil_density_kg_per_m3",
            "affected area x depth x density overflows",
        ));
    }

    let points = points.map(|p| SpreadPoint {
        concentration_mg_per_kg: p.sorbed_pb_g / p.soil_mass_kg * 1000.0,
        ..p
    });
    // 질량이 너무 작으면 농도가 무한대가 된다.
    if points.iter().any(|p| !p.concentration_mg_per_kg.is_finite()) {
        return Err(invalid(
            "soil_mass_kg",
            "soil mass too small for a finite concentration",
        ));
    }

    Ok(LeachingResult { total_pb_g, points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_mode_is_zero_at_panel_edge() {
        let s = PanelFootprint::ExcludePanelFootprint.affected_surface_m2(0.0, 10.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn include_and_exclude_differ_by_panel_surface() {
        let inc = PanelFootprint::IncludePanelFootprint.affected_surface_m2(0.7, 12.0);
        let exc = PanelFootprint::ExcludePanelFootprint.affected_surface_m2(0.7, 12.0);
        assert!((inc - exc - 12.0).abs() < 1e-9, "inc={inc} exc={exc}");
    }
}
