#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Semantic unit of a generated value, selecting its rounding precision.
pub enum Unit {
    /// Pixels, one decimal.
    Px,
    /// Degrees, one decimal.
    Deg,
    /// Dimensionless scale, two decimals.
    Scale,
    /// Opacity or percentage, two decimals.
    Opacity,
}

impl Unit {
    /// Decimal places kept for this unit.
    pub fn decimals(self) -> u32 {
        match self {
            Self::Px | Self::Deg => 1,
            Self::Scale | Self::Opacity => 2,
        }
    }
}

/// Round `value` to the precision of `unit`.
pub fn round_by_unit(value: f64, unit: Unit) -> f64 {
    round_to(value, unit.decimals())
}

/// Round half toward positive infinity at `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale + 0.5).floor() / scale
}

#[cfg(test)]
#[path = "../../tests/unit/transform/round.rs"]
mod tests;
