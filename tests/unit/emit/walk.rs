use super::*;
use crate::{
    emit::{css::CssKeyframes, object::ObjectKeyframes},
    params::record::{Channel, EnabledProperties},
    spring::sampler::sample_frames,
};

struct Positions;

impl KeyframeFormat for Positions {
    fn position(&self, ratio: f64) -> f64 {
        ratio
    }

    fn end_position(&self) -> f64 {
        1.0
    }

    fn needs_terminal(&self, sampled_empty: bool, _last_position: Option<f64>) -> bool {
        sampled_empty
    }

    fn entry(&self, position: f64, transform: Option<&str>, opacity: Option<f64>) -> String {
        format!("{position}|{}|{opacity:?}", transform.unwrap_or("-"))
    }

    fn document(&self, entries: &[String], _summary: &Summary) -> String {
        entries.join("\n")
    }
}

#[test]
fn one_entry_per_active_frame() {
    let params = ParameterRecord::default();
    let sampled = sample_frames(&params);
    let entries = walk_entries(&Positions, &sampled, &params);
    assert_eq!(entries.len(), sampled.len());
    assert!(entries[0].starts_with("0|translate("));
    assert!(entries.last().unwrap().starts_with("1|"));
}

#[test]
fn frames_without_active_rules_are_dropped() {
    let params = ParameterRecord {
        enabled: EnabledProperties::none(),
        ..ParameterRecord::default()
    };
    let sampled = sample_frames(&params);
    assert!(!sampled.is_empty());
    assert!(walk_entries(&Positions, &sampled, &params).is_empty());
    assert!(walk_entries(&ObjectKeyframes, &sampled, &params).is_empty());
}

#[test]
fn css_and_object_positions_stay_in_step() {
    let params = ParameterRecord {
        damping: 1.2,
        frequency: 8.0,
        amplitude_threshold_percent: 1.0,
        enabled: EnabledProperties::from_channels([Channel::SkewX, Channel::Opacity]),
        ..ParameterRecord::default()
    };
    let sampled = sample_frames(&params);
    let css = walk_entries(&CssKeyframes, &sampled, &params);
    let obj = walk_entries(&ObjectKeyframes, &sampled, &params);
    assert_eq!(css.len(), obj.len());

    for (c, o) in css.iter().zip(&obj) {
        let pct: f64 = c.trim().split('%').next().unwrap().parse().unwrap();
        let off: f64 = o
            .trim()
            .trim_start_matches("{ offset: ")
            .split(',')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!((pct / 100.0 - off).abs() <= 0.0001 + 1e-12);

        let c_rules = c.split_once("{ ").unwrap().1;
        let o_rules = o.split_once(", ").unwrap().1;
        let c_skew = c_rules.split(';').next().unwrap().trim_start_matches("transform: ");
        let o_skew = o_rules
            .split(',')
            .next()
            .unwrap()
            .trim_start_matches("transform: ")
            .trim_matches('\'');
        assert_eq!(c_skew, o_skew);
    }
}
