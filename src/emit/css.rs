use crate::{
    emit::{
        ANIMATING_SELECTOR, ANIMATION_NAME,
        summary::Summary,
        walk::{EmittedKeyframes, KeyframeFormat, emit},
    },
    foundation::core::fmt_num,
    params::record::ParameterRecord,
    spring::sampler::SampledFrames,
    transform::round::{Unit, round_by_unit},
};

#[derive(Clone, Copy, Debug, Default)]
/// `@keyframes` block keyed by percentages.
pub struct CssKeyframes;

impl KeyframeFormat for CssKeyframes {
    fn position(&self, ratio: f64) -> f64 {
        round_by_unit(100.0 * ratio, Unit::Opacity)
    }

    fn end_position(&self) -> f64 {
        100.0
    }

    fn needs_terminal(&self, sampled_empty: bool, _last_position: Option<f64>) -> bool {
        sampled_empty
    }

    fn entry(&self, position: f64, transform: Option<&str>, opacity: Option<f64>) -> String {
        let mut rules = Vec::with_capacity(2);
        if let Some(t) = transform {
            rules.push(format!("transform: {t}"));
        }
        if let Some(o) = opacity {
            rules.push(format!("opacity: {}", fmt_num(o)));
        }
        format!("  {}% {{ {}; }}", fmt_num(position), rules.join("; "))
    }

    fn document(&self, entries: &[String], summary: &Summary) -> String {
        let mut lines = Vec::with_capacity(entries.len() + 2);
        lines.push(format!("@keyframes {ANIMATION_NAME} {{"));
        lines.extend(entries.iter().cloned());
        lines.push("}".to_string());

        format!(
            "{}\n\n{}\n{}",
            lines.join("\n"),
            summary.comment(),
            binding_rule(summary.realized_duration_ms, &summary.origin_css()),
        )
    }
}

/// Rule binding the animation at `duration_ms` with `origin` to the demo selector.
pub fn binding_rule(duration_ms: u64, origin: &str) -> String {
    format!(
        "{ANIMATING_SELECTOR} {{\n  animation: {ANIMATION_NAME} {duration_ms}ms linear;\n  transform-origin: {origin};\n}}"
    )
}

/// Rule binding only the playback duration, without a transform origin.
pub fn playback_rule(duration_ms: u64) -> String {
    format!("{ANIMATING_SELECTOR} {{\n  animation: {ANIMATION_NAME} {duration_ms}ms linear;\n}}")
}

/// Render the CSS output for `sampled`.
pub fn emit_css(sampled: &SampledFrames, params: &ParameterRecord) -> EmittedKeyframes {
    emit(&CssKeyframes, sampled, params)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/css.rs"]
mod tests;
