use crate::{
    foundation::core::fmt_num,
    params::record::{EnabledProperties, TransformOrigin},
    spring::sampler::SampledFrames,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Facts shared by the summary comment of both output formats.
pub struct Summary {
    /// Number of sampled frames.
    pub frames: usize,
    /// Realized keyframe duration in milliseconds.
    pub realized_duration_ms: u64,
    /// Active property families in display order.
    pub properties: Vec<&'static str>,
    /// Transform origin in percent.
    pub origin: TransformOrigin,
}

impl Summary {
    /// Summarize one sampling run.
    pub fn new(
        sampled: &SampledFrames,
        enabled: &EnabledProperties,
        origin: TransformOrigin,
    ) -> Self {
        Self {
            frames: sampled.len(),
            realized_duration_ms: sampled.realized_duration_ms(),
            properties: property_families(enabled),
            origin,
        }
    }

    /// `X% Y%` form of the transform origin.
    pub fn origin_css(&self) -> String {
        format!("{}% {}%", fmt_num(self.origin.x), fmt_num(self.origin.y))
    }

    /// Block comment opening both outputs.
    pub fn comment(&self) -> String {
        format!(
            "/* Spring Animation Summary:\n * Frames: {}\n * Duration: {}ms\n * Properties: {}\n * Transform Origin: {}\n */",
            self.frames,
            self.realized_duration_ms,
            self.properties.join(", "),
            self.origin_css(),
        )
    }
}

/// Property families with at least one enabled channel.
pub fn property_families(enabled: &EnabledProperties) -> Vec<&'static str> {
    let mut out = Vec::with_capacity(5);
    if enabled.translate_x || enabled.translate_y {
        out.push("translate");
    }
    if enabled.rotate_x || enabled.rotate_y {
        out.push("rotate");
    }
    if enabled.scale_x || enabled.scale_y {
        out.push("scale");
    }
    if enabled.skew_x || enabled.skew_y {
        out.push("skew");
    }
    if enabled.opacity {
        out.push("opacity");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/emit/summary.rs"]
mod tests;
