use super::*;

#[test]
fn defaults_match_standard_preset() {
    let p = ParameterRecord::default();
    assert_eq!(p.damping, 3.0);
    assert_eq!(p.frequency, 20.0);
    assert_eq!(p.amplitude_threshold_percent, 0.2);
    assert_eq!(p.css_duration_ms, 800);
    assert_eq!(p.multipliers.rotation, 20.0);
    assert_eq!(p.multipliers.translation, 3.0);
    assert_eq!(
        p.enabled.enabled_channels(),
        vec![
            Channel::TranslateX,
            Channel::TranslateY,
            Channel::RotateX,
            Channel::RotateY
        ]
    );
    p.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let p = ParameterRecord::from_json_str(r#"{ "damping": 5, "enabled": { "opacity": true } }"#)
        .unwrap();
    assert_eq!(p.damping, 5.0);
    assert_eq!(p.frequency, 20.0);
    assert_eq!(p.enabled.enabled_channels(), vec![Channel::Opacity]);
    assert!(!p.enabled.any_transform());
}

#[test]
fn malformed_json_is_config_error() {
    let err = ParameterRecord::from_json_str("{ damping: ").unwrap_err();
    assert!(matches!(err, SpringError::Config(_)));
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut p = ParameterRecord::default();
    p.damping = 0.0;
    assert!(p.validate().is_err());

    let mut p = ParameterRecord::default();
    p.frequency = -1.0;
    assert!(p.validate().is_err());

    let mut p = ParameterRecord::default();
    p.amplitude_threshold_percent = -0.1;
    assert!(p.validate().is_err());

    let mut p = ParameterRecord::default();
    p.multipliers.scale = f64::NAN;
    assert!(p.validate().is_err());
}

#[test]
fn channel_names_parse_back() {
    for c in Channel::ALL {
        assert_eq!(Channel::parse(c.css_name()).unwrap(), c);
    }
    assert_eq!(Channel::parse("ROTATEx").unwrap(), Channel::RotateX);
    assert!(Channel::parse("blur").is_err());
}

#[test]
fn mask_helpers_agree() {
    assert!(!EnabledProperties::none().any());
    assert!(EnabledProperties::all().any_transform());
    let only_opacity = EnabledProperties::from_channels([Channel::Opacity]);
    assert!(only_opacity.any());
    assert!(!only_opacity.any_transform());

    let mut m = EnabledProperties::none();
    m.set(Channel::SkewY, true);
    assert!(m.is_enabled(Channel::SkewY));
    assert!(!m.is_enabled(Channel::SkewX));
}
