use super::*;
use crate::params::record::EnabledProperties;

#[test]
fn empty_mask_fails_before_sampling() {
    let params = ParameterRecord {
        enabled: EnabledProperties::none(),
        ..ParameterRecord::default()
    };
    let err = generate(&params).unwrap_err();
    assert!(matches!(err, SpringError::Validation(_)));
    assert!(err.to_string().contains("at least one animation property"));
}

#[test]
fn nominal_and_realized_durations_are_independent() {
    let mut params = ParameterRecord::default();
    params.css_duration_ms = 1500;
    let a = generate(&params).unwrap();
    params.css_duration_ms = 200;
    let b = generate(&params).unwrap();

    assert_eq!(a.css_animation_duration_ms, 1500);
    assert_eq!(b.css_animation_duration_ms, 200);
    assert_eq!(a.keyframes_duration_ms, b.keyframes_duration_ms);
    assert_eq!(a.css_keyframes, b.css_keyframes);
    assert_eq!(a.js_keyframes, b.js_keyframes);
}

#[test]
fn playback_stylesheet_appends_nominal_rule() {
    let r = generate(&ParameterRecord::default()).unwrap();
    let sheet = r.playback_stylesheet();
    assert!(sheet.starts_with(&r.css_keyframes));
    assert!(sheet.ends_with("animation: spring-animation 800ms linear;\n}"));
}

#[test]
fn report_serializes_metadata() {
    let r = generate(&ParameterRecord::default()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&r.to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["total_frames"], 33);
    assert_eq!(v["keyframes_duration_ms"], 534);
    assert_eq!(v["css_animation_duration_ms"], 800);
    assert_eq!(v["stopped_early"], true);
}

#[test]
fn repeated_calls_are_identical() {
    let params = ParameterRecord::default();
    assert_eq!(generate(&params).unwrap(), generate(&params).unwrap());
}
