use crate::{
    params::record::Multipliers,
    transform::round::{Unit, round_by_unit},
};

const TRANSLATE_X_GAIN: f64 = 0.5;
const TRANSLATE_Y_GAIN: f64 = -1.0;
const ROTATE_X_GAIN: f64 = 1.5;
const ROTATE_Y_GAIN: f64 = 1.0;
const SCALE_Y_GAIN: f64 = 0.8;
const SKEW_X_GAIN: f64 = 0.3;
const SKEW_Y_GAIN: f64 = 0.2;
const OPACITY_MIN: f64 = 0.1;
const OPACITY_MAX: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rounded per-frame transform values.
pub struct TransformValues {
    /// Pixels.
    pub translate_x: f64,
    /// Pixels.
    pub translate_y: f64,
    /// Degrees.
    pub rotate_x: f64,
    /// Degrees.
    pub rotate_y: f64,
    /// Dimensionless.
    pub scale_x: f64,
    /// Dimensionless.
    pub scale_y: f64,
    /// Degrees.
    pub skew_x: f64,
    /// Degrees.
    pub skew_y: f64,
    /// In `[0.1, 1]`.
    pub opacity: f64,
}

impl Default for TransformValues {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            skew_y: 0.0,
            opacity: 1.0,
        }
    }
}

impl TransformValues {
    /// Derive every property from one amplitude (`tilt`).
    ///
    /// Each property is linear in `tilt` with its own fixed gain so the
    /// channels move with distinct weights; opacity is clamped.
    pub fn compose(tilt: f64, m: &Multipliers) -> Self {
        let opacity = (1.0 - (tilt * m.opacity).abs()).clamp(OPACITY_MIN, OPACITY_MAX);
        Self {
            translate_x: round_by_unit(tilt * m.translation * TRANSLATE_X_GAIN, Unit::Px),
            translate_y: round_by_unit(tilt * m.translation * TRANSLATE_Y_GAIN, Unit::Px),
            rotate_x: round_by_unit(tilt * m.rotation * ROTATE_X_GAIN, Unit::Deg),
            rotate_y: round_by_unit(tilt * m.rotation * ROTATE_Y_GAIN, Unit::Deg),
            scale_x: round_by_unit(1.0 + tilt * m.scale, Unit::Scale),
            scale_y: round_by_unit(1.0 + tilt * m.scale * SCALE_Y_GAIN, Unit::Scale),
            skew_x: round_by_unit(tilt * m.rotation * SKEW_X_GAIN, Unit::Deg),
            skew_y: round_by_unit(tilt * m.rotation * SKEW_Y_GAIN, Unit::Deg),
            opacity: round_by_unit(opacity, Unit::Opacity),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/compose.rs"]
mod tests;
