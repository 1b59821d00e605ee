use super::*;

#[test]
fn starts_at_unit_amplitude() {
    for (d, f) in [(0.5, 1.0), (3.0, 20.0), (12.0, 3.5)] {
        assert_eq!(Oscillator::new(d, f).amplitude(0.0), 1.0);
    }
}

#[test]
fn bounded_by_envelope() {
    let osc = Oscillator::new(3.0, 20.0);
    for k in 0..600u32 {
        let t = f64::from(k) / 60.0;
        assert!(osc.amplitude(t).abs() <= osc.envelope(t) + 1e-15);
    }
}

#[test]
fn changes_sign_across_zero_crossing() {
    let osc = Oscillator::new(1.0, std::f64::consts::PI);
    assert!(osc.amplitude(0.4) > 0.0);
    assert!(osc.amplitude(0.6) < 0.0);
}

#[test]
fn free_function_matches_method() {
    let osc = Oscillator::new(2.0, 7.0);
    assert_eq!(osc.amplitude(0.3), amplitude(0.3, 2.0, 7.0));
}
