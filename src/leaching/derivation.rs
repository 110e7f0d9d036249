use super::materials::{find_material, MaterialSpec};

/// 흡수층 두께 입력 허용 범위 [nm]
pub const MIN_THICKNESS_NM: f64 = 1.0;
pub const MAX_THICKNESS_NM: f64 = 1000.0;

const NM_TO_CM: f64 = 1e-7;
const CM2_PER_M2: f64 = 100.0 * 100.0;

/// 납 함량 추정 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivationError {
    /// 재료 테이블에 없는 키
    UnknownMaterial(String),
    /// 두께가 허용 범위를 벗어남
    InvalidInput(&'static str),
}

impl std::fmt::Display for DerivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DerivationError::UnknownMaterial(key) => write!(f, "unknown material: {key}"),
            DerivationError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for DerivationError {}

/// 흡수층 두께와 재료로 패널 단위 면적당 납 함량 [g/m2]을 추정한다.
///
/// c = t[cm] × ρ_Pb[g/cm3] × 10000[cm2/m2]
///
/// 결과는 제안값일 뿐이며 누출 계산 입력에 자동으로 반영되지 않는다.
pub fn derive_concentration(thickness_nm: f64, material_key: &str) -> Result<f64, DerivationError> {
    let material = find_material(material_key)
        .ok_or_else(|| DerivationError::UnknownMaterial(material_key.trim().to_string()))?;
    derive_concentration_for(thickness_nm, material)
}

/// 이미 조회한 재료로 납 함량을 계산한다.
pub fn derive_concentration_for(
    thickness_nm: f64,
    material: &MaterialSpec,
) -> Result<f64, DerivationError> {
    if !thickness_nm.is_finite() {
        return Err(DerivationError::InvalidInput("thickness must be a finite number"));
    }
    if !(MIN_THICKNESS_NM..=MAX_THICKNESS_NM).contains(&thickness_nm) {
        return Err(DerivationError::InvalidInput(
            "thickness must be between 1 and 1000 nm",
        ));
    }
    let thickness_cm = thickness_nm * NM_TO_CM;
    Ok(thickness_cm * material.lead_density_g_per_cm3 * CM2_PER_M2)
}
