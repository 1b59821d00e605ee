use crate::{
    emit::summary::Summary,
    params::record::ParameterRecord,
    spring::sampler::SampledFrames,
    transform::serialize::{NO_TRANSFORM, transform_string},
};

/// Output syntax of one keyframe text format.
///
/// The walk over frames, the property gating and the synthetic terminal
/// keyframe are shared; a format only decides how positions are encoded,
/// when a terminal entry is needed and how text is laid out.
pub trait KeyframeFormat {
    /// Encoded position for `ratio = time / time_last`, `ratio` in `(0, 1]`.
    fn position(&self, ratio: f64) -> f64;

    /// Encoded position of the timeline end.
    fn end_position(&self) -> f64;

    /// Whether a synthetic terminal entry follows the sampled entries.
    fn needs_terminal(&self, sampled_empty: bool, last_position: Option<f64>) -> bool;

    /// One keyframe entry. At least one of `transform` and `opacity` is set.
    fn entry(&self, position: f64, transform: Option<&str>, opacity: Option<f64>) -> String;

    /// Full document from rendered entries and the shared summary.
    fn document(&self, entries: &[String], summary: &Summary) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Text produced by one format, with the metadata derived from the walk.
pub struct EmittedKeyframes {
    /// Rendered document.
    pub text: String,
    /// Number of sampled frames.
    pub frame_count: usize,
    /// Realized keyframe duration in milliseconds.
    pub realized_duration_ms: u64,
    /// Sampling stopped before the horizon.
    pub stopped_early: bool,
}

/// Render `sampled` with `format`.
pub fn emit<F: KeyframeFormat>(
    format: &F,
    sampled: &SampledFrames,
    params: &ParameterRecord,
) -> EmittedKeyframes {
    let entries = walk_entries(format, sampled, params);
    let summary = Summary::new(sampled, &params.enabled, params.transform_origin);
    EmittedKeyframes {
        text: format.document(&entries, &summary),
        frame_count: summary.frames,
        realized_duration_ms: summary.realized_duration_ms,
        stopped_early: sampled.stopped_early,
    }
}

/// Keyframe entries for `sampled`, including any synthetic terminal entry.
pub fn walk_entries<F: KeyframeFormat>(
    format: &F,
    sampled: &SampledFrames,
    params: &ParameterRecord,
) -> Vec<String> {
    let enabled = &params.enabled;
    let time_last = sampled.last_time_s();
    let mut entries = Vec::with_capacity(sampled.len() + 1);
    let mut last_position = None;

    for (i, frame) in sampled.frames.iter().enumerate() {
        // time_last is 0 only for a lone frame at t=0.
        let position = if i == 0 || time_last == 0.0 {
            0.0
        } else {
            format.position(frame.time_s / time_last)
        };

        let transform = transform_string(&frame.values, enabled);
        let opacity = enabled.opacity.then_some(frame.values.opacity);
        if transform.is_none() && opacity.is_none() {
            continue;
        }

        entries.push(format.entry(position, transform.as_deref(), opacity));
        last_position = Some(position);
    }

    if format.needs_terminal(sampled.is_empty(), last_position) {
        let transform = enabled.any_transform().then_some(NO_TRANSFORM);
        let opacity = enabled.opacity.then_some(1.0);
        if transform.is_some() || opacity.is_some() {
            entries.push(format.entry(format.end_position(), transform, opacity));
        }
    }

    entries
}

#[cfg(test)]
#[path = "../../tests/unit/emit/walk.rs"]
mod tests;
