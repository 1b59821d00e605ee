use super::*;
use crate::{
    params::record::{Channel, EnabledProperties},
    spring::sampler::sample_frames,
};

fn with_mask(enabled: EnabledProperties) -> ParameterRecord {
    ParameterRecord {
        enabled,
        ..ParameterRecord::default()
    }
}

#[test]
fn default_run_renders_percentage_rules() {
    let params = ParameterRecord::default();
    let out = emit_css(&sample_frames(&params), &params);

    assert!(out.text.starts_with(
        "@keyframes spring-animation {\n  0% { transform: translate(1.5px, -3px) rotateX(30deg) rotateY(20deg); }\n  3.13% { transform: translate(1.3px, -2.7px) rotateX(27deg) rotateY(18deg); }\n  6.25% {"
    ));
    assert!(out.text.contains("\n  50% { "));
    assert!(out.text.contains("\n  100% { "));
    assert_eq!(out.text.matches("% { transform:").count(), 33);
    assert_eq!(out.frame_count, 33);
    assert_eq!(out.realized_duration_ms, 534);
    assert!(out.stopped_early);
}

#[test]
fn trailer_binds_realized_duration_and_origin() {
    let params = ParameterRecord::default();
    let out = emit_css(&sample_frames(&params), &params);
    assert!(out.text.ends_with(
        "}\n\n/* Spring Animation Summary:\n * Frames: 33\n * Duration: 534ms\n * Properties: translate, rotate\n * Transform Origin: 50% 50%\n */\n.animating .body-square {\n  animation: spring-animation 534ms linear;\n  transform-origin: 50% 50%;\n}"
    ));
}

#[test]
fn opacity_only_omits_transform_clause() {
    let params = with_mask(EnabledProperties::from_channels([Channel::Opacity]));
    let out = emit_css(&sample_frames(&params), &params);
    assert!(!out.text.contains("transform:"));
    assert!(out.text.contains("  0% { opacity: 0.7; }"));
    assert_eq!(out.text.matches("% { opacity: ").count(), 33);
}

#[test]
fn combined_rule_joins_with_semicolons() {
    let params = with_mask(EnabledProperties::from_channels([
        Channel::RotateY,
        Channel::Opacity,
    ]));
    let out = emit_css(&sample_frames(&params), &params);
    assert!(out.text.contains("  0% { transform: rotateY(20deg); opacity: 0.7; }"));
}

#[test]
fn empty_sequence_emits_synthetic_end_rule() {
    let mut params = with_mask(EnabledProperties::from_channels([
        Channel::ScaleX,
        Channel::Opacity,
    ]));
    params.amplitude_threshold_percent = 100.0;
    let out = emit_css(&sample_frames(&params), &params);
    assert!(out.text.starts_with(
        "@keyframes spring-animation {\n  100% { transform: none; opacity: 1; }\n}\n\n"
    ));
    assert!(out.text.contains(" * Frames: 0\n * Duration: 0ms\n"));
    assert!(out.text.contains("animation: spring-animation 0ms linear;"));
}

#[test]
fn empty_sequence_gates_terminal_by_mask() {
    let mut params = with_mask(EnabledProperties::from_channels([Channel::Opacity]));
    params.amplitude_threshold_percent = 100.0;
    let out = emit_css(&sample_frames(&params), &params);
    assert!(out.text.contains("  100% { opacity: 1; }"));
    assert!(!out.text.contains("transform:"));
}

#[test]
fn lone_frame_sits_at_zero_percent() {
    let mut params = ParameterRecord::default();
    params.amplitude_threshold_percent = 99.9;
    let out = emit_css(&sample_frames(&params), &params);
    assert!(out.text.contains("  0% { transform: "));
    assert!(!out.text.contains("100%"));
    assert!(!out.text.contains("NaN"));
}

#[test]
fn playback_rule_carries_nominal_duration() {
    assert_eq!(
        playback_rule(800),
        ".animating .body-square {\n  animation: spring-animation 800ms linear;\n}"
    );
}
