use approx::{assert_abs_diff_eq, assert_relative_eq};
use perovskite_leaching_toolbox::leaching::{
    compute_leaching, GuidanceLevel, LeachingError, LeachingInputs, PanelFootprint, SERIES_LEN,
    SPREAD_MULTIPLIERS, SUMMARY_INDEX,
};

fn reference_input() -> LeachingInputs {
    LeachingInputs {
        panel_surface_m2: 10.0,
        pb_concentration_g_per_m2: 0.9,
        leached_percent: 100.0,
        spread_distance_m: 0.5,
        soil_depth_m: 0.5,
        soil_density_kg_per_m3: 3000.0,
        sorption_percent: 100.0,
        footprint: PanelFootprint::IncludePanelFootprint,
    }
}

#[test]
fn full_footprint_reference_case() {
    let res = compute_leaching(reference_input()).expect("valid input");
    assert_relative_eq!(res.total_pb_g, 9.0, epsilon = 1e-12);
    for sorbed in res.sorbed_series() {
        assert_relative_eq!(sorbed, 9.0, epsilon = 1e-12);
    }

    let s = res.summary();
    let side = 0.5 + 10.0_f64.sqrt();
    assert_relative_eq!(s.distance_m, 0.5);
    assert_relative_eq!(s.affected_surface_m2, side * side, max_relative = 1e-12);
    assert_abs_diff_eq!(s.affected_surface_m2, 13.412, epsilon = 1e-3);
    assert_abs_diff_eq!(s.soil_volume_m3, 6.706, epsilon = 1e-3);
    assert_abs_diff_eq!(s.soil_mass_kg, 20118.4, epsilon = 0.1);
    assert_abs_diff_eq!(s.concentration_mg_per_kg, 0.4474, epsilon = 1e-4);
    assert_eq!(res.peak_level(), GuidanceLevel::BelowRecommended);
}

#[test]
fn series_follow_multipliers() {
    let res = compute_leaching(reference_input()).expect("valid input");
    let distances = res.distance_series();
    assert_eq!(distances.len(), SERIES_LEN);
    assert_eq!(res.concentration_series().len(), SERIES_LEN);
    for (d, m) in distances.iter().zip(SPREAD_MULTIPLIERS) {
        assert_relative_eq!(*d, 0.5 * m);
    }
    assert_relative_eq!(SPREAD_MULTIPLIERS[SUMMARY_INDEX], 1.0);
}

#[test]
fn excluding_panel_footprint_raises_concentration() {
    let include = compute_leaching(reference_input()).expect("include");
    let exclude = compute_leaching(LeachingInputs {
        footprint: PanelFootprint::ExcludePanelFootprint,
        ..reference_input()
    })
    .expect("exclude");

    let s = exclude.summary();
    assert_relative_eq!(
        s.affected_surface_m2,
        include.summary().affected_surface_m2 - 10.0,
        max_relative = 1e-12
    );
    // 0.5 * (0.5 + 2√10) ≈ 3.4123 m2
    assert_abs_diff_eq!(s.affected_surface_m2, 3.4123, epsilon = 1e-4);
    for (e, i) in exclude
        .concentration_series()
        .iter()
        .zip(include.concentration_series())
    {
        assert!(*e > i, "exclude={e} include={i}");
    }
}

#[test]
fn concentration_decreases_with_distance() {
    for footprint in [
        PanelFootprint::ExcludePanelFootprint,
        PanelFootprint::IncludePanelFootprint,
    ] {
        let res = compute_leaching(LeachingInputs {
            footprint,
            ..LeachingInputs::default()
        })
        .expect("valid input");
        let series = res.concentration_series();
        for pair in series[SUMMARY_INDEX..].windows(2) {
            assert!(pair[0] >= pair[1], "{footprint:?}: {series:?}");
        }
        assert_relative_eq!(res.peak_concentration_mg_per_kg(), series[0]);
    }
}

#[test]
fn total_pb_is_linear_in_surface_and_content() {
    let base = compute_leaching(reference_input()).expect("base");
    let k = 3.0;

    let scaled_surface = compute_leaching(LeachingInputs {
        panel_surface_m2: 10.0 * k,
        ..reference_input()
    })
    .expect("surface");
    assert_relative_eq!(scaled_surface.total_pb_g, base.total_pb_g * k, max_relative = 1e-12);

    let scaled_content = compute_leaching(LeachingInputs {
        pb_concentration_g_per_m2: 0.9 * k,
        ..reference_input()
    })
    .expect("content");
    assert_relative_eq!(scaled_content.total_pb_g, base.total_pb_g * k, max_relative = 1e-12);
}

#[test]
fn zero_leaching_or_sorption_gives_clean_soil() {
    let no_leach = compute_leaching(LeachingInputs {
        leached_percent: 0.0,
        ..reference_input()
    })
    .expect("no leach");
    assert_eq!(no_leach.total_pb_g, 0.0);
    assert!(no_leach.concentration_series().iter().all(|c| *c == 0.0));

    let no_sorption = compute_leaching(LeachingInputs {
        sorption_percent: 0.0,
        ..reference_input()
    })
    .expect("no sorption");
    assert_relative_eq!(no_sorption.total_pb_g, 9.0, epsilon = 1e-12);
    assert_eq!(no_sorption.sorbed_pb_g(), 0.0);
    assert!(no_sorption.concentration_series().iter().all(|c| *c == 0.0));
}

#[test]
fn zero_density_is_rejected() {
    let err = compute_leaching(LeachingInputs {
        soil_density_kg_per_m3: 0.0,
        ..reference_input()
    })
    .unwrap_err();
    assert!(matches!(
        err,
        LeachingError::InvalidInput {
            field: "soil_density_kg_per_m3",
            ..
        }
    ));
}

#[test]
fn zero_depth_and_surface_are_rejected() {
    for input in [
        LeachingInputs {
            soil_depth_m: 0.0,
            ..reference_input()
        },
        LeachingInputs {
            panel_surface_m2: 0.0,
            ..reference_input()
        },
    ] {
        assert!(matches!(
            compute_leaching(input),
            Err(LeachingError::InvalidInput { .. })
        ));
    }
}

#[test]
fn percentages_outside_range_are_rejected() {
    let over = compute_leaching(LeachingInputs {
        leached_percent: 120.0,
        ..reference_input()
    });
    assert!(matches!(
        over,
        Err(LeachingError::InvalidInput {
            field: "leached_percent",
            ..
        })
    ));

    let negative = compute_leaching(LeachingInputs {
        sorption_percent: -5.0,
        ..reference_input()
    });
    assert!(matches!(
        negative,
        Err(LeachingError::InvalidInput {
            field: "sorption_percent",
            ..
        })
    ));

    let nan = compute_leaching(LeachingInputs {
        spread_distance_m: f64::NAN,
        ..reference_input()
    });
    assert!(nan.is_err());
}

#[test]
fn zero_distance_without_panel_area_is_degenerate() {
    let err = compute_leaching(LeachingInputs {
        spread_distance_m: 0.0,
        footprint: PanelFootprint::ExcludePanelFootprint,
        ..reference_input()
    })
    .unwrap_err();
    assert!(matches!(err, LeachingError::DegenerateGeometry { .. }), "{err}");

    // 패널 아래를 포함하면 거리 0에서도 계산 가능하다.
    let res = compute_leaching(LeachingInputs {
        spread_distance_m: 0.0,
        ..reference_input()
    })
    .expect("include footprint");
    assert_relative_eq!(res.summary().affected_surface_m2, 10.0, max_relative = 1e-12);
}

#[test]
fn overflowing_lead_mass_is_rejected() {
    let res = compute_leaching(LeachingInputs {
        panel_surface_m2: 1e200,
        pb_concentration_g_per_m2: 1e200,
        soil_depth_m: 1e100,
        soil_density_kg_per_m3: 1e10,
        ..reference_input()
    });
    assert!(
        matches!(res, Err(LeachingError::InvalidInput { .. })),
        "{res:?}"
    );
}

#[test]
fn overflowing_soil_mass_is_rejected() {
    let res = compute_leaching(LeachingInputs {
        soil_depth_m: 1e200,
        soil_density_kg_per_m3: 1e200,
        ..reference_input()
    });
    assert!(
        matches!(
            res,
            Err(LeachingError::InvalidInput {
                field: "soil_density_kg_per_m3",
                ..
            })
        ),
        "{res:?}"
    );
}

#[test]
fn vanishing_soil_mass_is_rejected() {
    // 질량이 최소 양수 근처라 농도가 무한대로 발산한다.
    let res = compute_leaching(LeachingInputs {
        soil_depth_m: 1e-300,
        soil_density_kg_per_m3: 1e-10,
        ..reference_input()
    });
    assert!(res.is_err(), "{res:?}");
}
