/// Fixed sampling rate of the frame sampler.
pub const SAMPLE_FPS: Fps = Fps { num: 60, den: 1 };

/// Safety bound on sampled time, in seconds.
pub const HORIZON_SECS: u64 = 10;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Zero-based index of a sampled frame.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frame rate.
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Time between consecutive frames.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Number of whole frames in `secs`.
    pub fn secs_to_frames(self, secs: u64) -> u64 {
        secs.saturating_mul(u64::from(self.num)) / u64::from(self.den)
    }
}

/// Shortest round-trip decimal rendering used in all generated text.
///
/// Negative zero prints as `0`.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
