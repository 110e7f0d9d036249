use approx::assert_relative_eq;
use perovskite_leaching_toolbox::leaching::{
    derive_concentration, derive_concentration_for, materials, DerivationError,
};

#[test]
fn mapbi3_200nm() {
    // 200e-7 cm × 1.37 g/cm3 × 10000 cm2/m2
    let c = derive_concentration(200.0, "MAPbI3").expect("known material");
    assert_relative_eq!(c, 0.274, max_relative = 1e-12);
}

#[test]
fn scales_with_thickness() {
    let thin = derive_concentration(100.0, "FAPbI3").expect("thin");
    let thick = derive_concentration(500.0, "fapbi3").expect("thick");
    assert_relative_eq!(thick, thin * 5.0, max_relative = 1e-12);
}

#[test]
fn every_material_in_table_is_derivable() {
    for m in materials::materials() {
        let c = derive_concentration_for(1000.0, m).expect(m.key);
        assert_relative_eq!(c, m.lead_density_g_per_cm3, max_relative = 1e-12);
    }
}

#[test]
fn unknown_material() {
    assert_eq!(
        derive_concentration(200.0, "CsSnI3"),
        Err(DerivationError::UnknownMaterial("CsSnI3".into()))
    );
}

#[test]
fn thickness_out_of_range() {
    for t in [0.0, 0.5, 1000.5, -10.0, f64::INFINITY] {
        assert!(
            matches!(
                derive_concentration(t, "MAPbI3"),
                Err(DerivationError::InvalidInput(_))
            ),
            "thickness {t}"
        );
    }
}
