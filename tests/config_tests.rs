//! Config loading and validation tests.

use std::fs;

use phys_modelling::{ConfigError, KronigPenneyParameters, PendulumParameters, RingsParameters};

fn pendulums_json(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![
        ("gravity_acceleration", "9.8"),
        ("pendulum_length", "1.0"),
        ("pendulum_mass", "1.0"),
        ("spring_stiffness", "2.0"),
        ("damping_coefficient", "0.1"),
        ("distance_to_spring", "0.3"),
        ("initial_angle1", "0.1"),
        ("initial_angle2", "0.0"),
        ("max_time", "10.0"),
        ("time_step", "0.01"),
    ];
    for (key, value) in overrides {
        if let Some(field) = fields.iter_mut().find(|(k, _)| k == key) {
            field.1 = value;
        }
    }
    let body: Vec<String> = fields
        .iter()
        .map(|(k, v)| format!("\"{}\": {}", k, v))
        .collect();
    format!("{{{}}}", body.join(", "))
}

fn rings_json(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![
        ("lens_radius", "10000"),
        ("wavelength", "550"),
        ("spectrum_center", "0"),
        ("spectrum_width", "0"),
    ];
    for (key, value) in overrides {
        if let Some(field) = fields.iter_mut().find(|(k, _)| k == key) {
            field.1 = value;
        }
    }
    let body: Vec<String> = fields
        .iter()
        .map(|(k, v)| format!("\"{}\": {}", k, v))
        .collect();
    format!("{{{}}}", body.join(", "))
}

fn assert_invalid(err: ConfigError, field: &str) {
    assert!(
        matches!(err, ConfigError::Invalid { .. }),
        "expected validation error, got {:?}",
        err
    );
    assert_eq!(err.field(), Some(field));
    assert!(err.to_string().starts_with("invalid configuration"));
}

// ============================================================================
// Pendulums
// ============================================================================

#[test]
fn test_valid_pendulums_config() {
    let params = PendulumParameters::from_json(&pendulums_json(&[])).unwrap();
    assert_eq!(params.time_step, 0.01);
    assert_eq!(params.max_time, 10.0);
}

#[test]
fn test_rejects_zero_length() {
    let err = PendulumParameters::from_json(&pendulums_json(&[("pendulum_length", "0")]))
        .unwrap_err();
    assert_invalid(err, "pendulum_length");
}

#[test]
fn test_rejects_negative_max_time() {
    let err = PendulumParameters::from_json(&pendulums_json(&[("max_time", "-1")])).unwrap_err();
    assert_invalid(err, "max_time");
}

#[test]
fn test_rejects_each_required_positive_field() {
    for field in [
        "gravity_acceleration",
        "pendulum_length",
        "pendulum_mass",
        "max_time",
        "time_step",
    ] {
        let err = PendulumParameters::from_json(&pendulums_json(&[(field, "0")])).unwrap_err();
        assert_invalid(err, field);
    }
}

#[test]
fn test_rejects_negative_non_negative_fields() {
    for field in ["spring_stiffness", "damping_coefficient", "distance_to_spring"] {
        assert!(PendulumParameters::from_json(&pendulums_json(&[(field, "0")])).is_ok());
        let err = PendulumParameters::from_json(&pendulums_json(&[(field, "-0.5")])).unwrap_err();
        assert_invalid(err, field);
    }
}

#[test]
fn test_negative_angles_allowed() {
    let params = PendulumParameters::from_json(&pendulums_json(&[
        ("initial_angle1", "-0.3"),
        ("initial_angle2", "-1.2"),
    ]))
    .unwrap();
    assert_eq!(params.initial_angle2, -1.2);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = PendulumParameters::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.field(), None);
}

#[test]
fn test_missing_required_field_is_parse_error() {
    let err = PendulumParameters::from_json(r#"{"gravity_acceleration": 9.8}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_csv_output_path() {
    let mut json = pendulums_json(&[]);
    json.pop();
    json.push_str(", \"csv_output\": \"series.csv\"}");
    let params = PendulumParameters::from_json(&json).unwrap();
    assert_eq!(params.csv_output.as_deref(), Some(std::path::Path::new("series.csv")));
}

// ============================================================================
// Rings
// ============================================================================

#[test]
fn test_valid_rings_config() {
    let params = RingsParameters::from_json(&rings_json(&[])).unwrap();
    assert!(params.is_monochromatic());
}

#[test]
fn test_rejects_zero_lens_radius() {
    let err = RingsParameters::from_json(&rings_json(&[("lens_radius", "0")])).unwrap_err();
    assert_invalid(err, "lens_radius");
}

#[test]
fn test_rejects_negative_spectrum_center() {
    let err = RingsParameters::from_json(&rings_json(&[("spectrum_center", "-1")])).unwrap_err();
    assert_invalid(err, "spectrum_center");
}

#[test]
fn test_rejects_negative_wavelength() {
    let err = RingsParameters::from_json(&rings_json(&[("wavelength", "-550")])).unwrap_err();
    assert_invalid(err, "wavelength");
}

#[test]
fn test_optional_spectrum_fields() {
    let params =
        RingsParameters::from_json(r#"{"lens_radius": 5000, "wavelength": 600}"#).unwrap();
    assert_eq!(params.spectrum_center, 0.0);
    assert_eq!(params.spectrum_width, 0.0);
}

#[test]
fn test_rejects_zero_image_size() {
    let err = RingsParameters::from_json(
        r#"{"lens_radius": 5000, "wavelength": 600, "image_size": 0}"#,
    )
    .unwrap_err();
    assert_invalid(err, "image_size");
}

#[test]
fn test_rejects_image_size_beyond_png_limit() {
    let err = RingsParameters::from_json(
        r#"{"lens_radius": 5000, "wavelength": 600, "image_size": 4294967296}"#,
    )
    .unwrap_err();
    assert_invalid(err, "image_size");
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pendulums_config.json");
    let err = PendulumParameters::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to open config file"));
}

#[test]
fn test_load_invalid_file_reports_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newtons_rings_config.json");
    fs::write(&path, rings_json(&[("lens_radius", "0")])).unwrap();

    let err = RingsParameters::load(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("failed to parse config file"));
    assert!(message.contains("invalid configuration"));
    assert!(err.downcast_ref::<ConfigError>().is_some());
}

#[test]
fn test_load_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pendulums_config.json");
    fs::write(&path, pendulums_json(&[])).unwrap();
    let params = PendulumParameters::load(&path).unwrap();
    assert_eq!(params.spring_stiffness, 2.0);
}

#[test]
fn test_kronig_penney_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let params = KronigPenneyParameters::load_or_default(dir.path().join("absent.json"));
    assert_eq!(params, KronigPenneyParameters::default());
}

#[test]
fn test_kronig_penney_malformed_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kronig_penney_config.json");
    fs::write(&path, "[1, 2").unwrap();
    assert_eq!(
        KronigPenneyParameters::load_or_default(&path),
        KronigPenneyParameters::default()
    );
}
