//! 흡수층 재료별 납 밀도와 토양 종류별 겉보기 밀도 참고 테이블.
//! 값은 참고용이며 실제 시료 분석값이 있으면 그것을 우선한다.

#[derive(Debug)]
pub struct MaterialSpec {
    pub key: &'static str,
    pub name: &'static str,
    /// 흡수층 단위 부피당 납 질량 [g/cm3]
    pub lead_density_g_per_cm3: f64,
    pub notes: &'static str,
}

#[derive(Debug)]
pub struct SoilType {
    pub name: &'static str,
    pub density_min_kg_per_m3: f64,
    pub density_max_kg_per_m3: f64,
}

impl SoilType {
    /// 범위의 중간값. 대표 밀도로 사용한다.
    pub fn typical_density_kg_per_m3(&self) -> f64 {
        0.5 * (self.density_min_kg_per_m3 + self.density_max_kg_per_m3)
    }
}

pub fn materials() -> &'static [MaterialSpec] {
    MATERIALS
}

pub fn soil_types() -> &'static [SoilType] {
    SOIL_TYPES
}

pub fn find_material(key: &str) -> Option<&'static MaterialSpec> {
    let key = key.trim();
    MATERIALS
        .iter()
        .find(|m| m.key.eq_ignore_ascii_case(key) || m.name.eq_ignore_ascii_case(key))
}

const MATERIALS: &[MaterialSpec] = &[
    MaterialSpec {
        key: "MAPbI3",
        name: "Methylammonium lead iodide",
        lead_density_g_per_cm3: 1.37,
        notes: "CH3NH3PbI3, measured",
    },
    MaterialSpec {
        key: "FAPbI3",
        name: "Formamidinium lead iodide",
        lead_density_g_per_cm3: 1.34,
        notes: "estimate: 4.10 g/cm3 x Pb fraction 0.327",
    },
    MaterialSpec {
        key: "MAPbBr3",
        name: "Methylammonium lead bromide",
        lead_density_g_per_cm3: 1.66,
        notes: "estimate: 3.83 g/cm3 x Pb fraction 0.433",
    },
];

const SOIL_TYPES: &[SoilType] = &[
    SoilType {
        name: "Sand",
        density_min_kg_per_m3: 1500.0,
        density_max_kg_per_m3: 1700.0,
    },
    SoilType {
        name: "Sandy loam",
        density_min_kg_per_m3: 1400.0,
        density_max_kg_per_m3: 1600.0,
    },
    SoilType {
        name: "Loam",
        density_min_kg_per_m3: 1300.0,
        density_max_kg_per_m3: 1500.0,
    },
    SoilType {
        name: "Silt loam",
        density_min_kg_per_m3: 1300.0,
        density_max_kg_per_m3: 1400.0,
    },
    SoilType {
        name: "Clay",
        density_min_kg_per_m3: 1100.0,
        density_max_kg_per_m3: 1300.0,
    },
    SoilType {
        name: "Compacted subsoil",
        density_min_kg_per_m3: 1700.0,
        density_max_kg_per_m3: 2000.0,
    },
];
