#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Damped cosine `e^(-damping * t) * cos(frequency * t)`.
pub struct Oscillator {
    /// Envelope decay rate.
    pub damping: f64,
    /// Angular frequency.
    pub frequency: f64,
}

impl Oscillator {
    /// Build an oscillator.
    pub fn new(damping: f64, frequency: f64) -> Self {
        Self { damping, frequency }
    }

    /// Amplitude at `time_s` seconds.
    pub fn amplitude(self, time_s: f64) -> f64 {
        amplitude(time_s, self.damping, self.frequency)
    }

    /// Decay envelope `e^(-damping * t)` bounding `|amplitude|`.
    pub fn envelope(self, time_s: f64) -> f64 {
        (-self.damping * time_s).exp()
    }
}

/// Free-function form of [`Oscillator::amplitude`].
pub fn amplitude(time_s: f64, damping: f64, frequency: f64) -> f64 {
    (-damping * time_s).exp() * (frequency * time_s).cos()
}

#[cfg(test)]
#[path = "../../tests/unit/spring/oscillator.rs"]
mod tests;
