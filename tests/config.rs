//! 설정 파일 로드/저장 회귀 테스트.
use std::fs;
use std::path::PathBuf;

use perovskite_leaching_toolbox::config::{load_or_default_at, load_or_fallback_at, Config, ConfigError};
use perovskite_leaching_toolbox::leaching::PanelFootprint;

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plt-config-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    dir.join("config.toml")
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_path("missing");
    let _ = fs::remove_file(&path);
    let cfg = load_or_default_at(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.defaults.soil_density_kg_per_m3, 1408.0);
    assert_eq!(cfg.defaults.footprint, PanelFootprint::ExcludePanelFootprint);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let path = temp_path("partial");
    fs::write(
        &path,
        "language = \"ko\"\n[defaults]\nsoil_depth_m = 0.5\nfootprint = \"IncludePanelFootprint\"\n",
    )
    .expect("write");
    let cfg = load_or_default_at(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.defaults.soil_depth_m, 0.5);
    assert_eq!(cfg.defaults.footprint, PanelFootprint::IncludePanelFootprint);
    assert_eq!(cfg.defaults.panel_surface_m2, 10.0);
}

#[test]
fn save_then_load() {
    let path = temp_path("roundtrip");
    let mut cfg = Config::default();
    cfg.defaults.pb_concentration_g_per_m2 = 0.274;
    cfg.language_pack_dir = Some("packs".into());
    cfg.save_to(&path).expect("save");
    assert_eq!(load_or_default_at(&path).expect("load"), cfg);
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_path("malformed");
    fs::write(&path, "defaults = 3\n").expect("write");
    assert!(load_or_default_at(&path).is_err());
}

#[test]
fn unreadable_file_falls_back_without_overwriting() {
    let path = temp_path("fallback");
    let original = "language = \"ko\"\n[defaults]\nsoil_density_kg_per_m3 = \"3000\"\n";
    fs::write(&path, original).expect("write");

    let (cfg, err) = load_or_fallback_at(&path);
    assert_eq!(cfg, Config::default());
    assert!(matches!(err, Some(ConfigError::Serde(_))), "{err:?}");
    assert_eq!(fs::read_to_string(&path).expect("read"), original);
}
