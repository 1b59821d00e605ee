use crate::{
    emit::{css::emit_css, css::playback_rule, object::emit_object},
    foundation::error::{SpringError, SpringResult},
    params::record::ParameterRecord,
    spring::sampler::sample_frames,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Terminal artifact of one generation call.
pub struct GenerationResult {
    /// `@keyframes` block, summary comment and binding rule.
    pub css_keyframes: String,
    /// Animation-object keyframe list with summary and usage comments.
    pub js_keyframes: String,
    /// Nominal playback duration copied from the input.
    pub css_animation_duration_ms: u64,
    /// Realized duration derived from the last sampled frame.
    pub keyframes_duration_ms: u64,
    /// Number of sampled frames.
    pub total_frames: usize,
    /// Threshold used to stop sampling.
    pub amplitude_threshold_percent: f64,
    /// Sampling stopped before the horizon.
    pub stopped_early: bool,
}

impl GenerationResult {
    /// CSS output followed by a rule playing it at the nominal duration.
    pub fn playback_stylesheet(&self) -> String {
        format!(
            "{}\n{}",
            self.css_keyframes,
            playback_rule(self.css_animation_duration_ms)
        )
    }

    /// JSON report of this result.
    pub fn to_json_pretty(&self) -> SpringResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpringError::serde(e.to_string()))
    }
}

/// Sample the spring described by `params` and render both keyframe formats.
///
/// Ranges are trusted (see [`ParameterRecord::validate`]); the only check
/// here is that at least one channel is enabled.
#[tracing::instrument(skip(params))]
pub fn generate(params: &ParameterRecord) -> SpringResult<GenerationResult> {
    if !params.enabled.any() {
        tracing::warn!("generation rejected: no channels enabled");
        return Err(SpringError::validation(
            "at least one animation property must be enabled",
        ));
    }

    let channels: Vec<&str> = params
        .enabled
        .enabled_channels()
        .into_iter()
        .map(|c| c.css_name())
        .collect();
    tracing::debug!(channels = %channels.join(", "), "enabled channels");

    let sampled = sample_frames(params);
    let css = emit_css(&sampled, params);
    let js = emit_object(&sampled, params);

    tracing::info!(
        frames = css.frame_count,
        css_duration_ms = params.css_duration_ms,
        keyframes_duration_ms = css.realized_duration_ms,
        threshold = params.amplitude_threshold_percent,
        stopped_early = css.stopped_early,
        "spring keyframes generated"
    );

    Ok(GenerationResult {
        css_keyframes: css.text,
        js_keyframes: js.text,
        css_animation_duration_ms: params.css_duration_ms,
        keyframes_duration_ms: css.realized_duration_ms,
        total_frames: css.frame_count,
        amplitude_threshold_percent: params.amplitude_threshold_percent,
        stopped_early: css.stopped_early,
    })
}

#[cfg(test)]
#[path = "../tests/unit/generate.rs"]
mod tests;
