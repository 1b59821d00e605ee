use crate::{
    emit::{
        ELEMENT_SELECTOR, KEYFRAMES_VAR,
        summary::Summary,
        walk::{EmittedKeyframes, KeyframeFormat, emit},
    },
    foundation::core::fmt_num,
    params::record::ParameterRecord,
    spring::sampler::SampledFrames,
    transform::round::round_to,
};

const OFFSET_DECIMALS: u32 = 4;

#[derive(Clone, Copy, Debug, Default)]
/// Web Animations keyframe list keyed by offsets in `[0, 1]`.
pub struct ObjectKeyframes;

impl KeyframeFormat for ObjectKeyframes {
    fn position(&self, ratio: f64) -> f64 {
        round_to(ratio, OFFSET_DECIMALS)
    }

    fn end_position(&self) -> f64 {
        1.0
    }

    fn needs_terminal(&self, sampled_empty: bool, last_position: Option<f64>) -> bool {
        sampled_empty || last_position.is_none_or(|p| p < 1.0)
    }

    fn entry(&self, position: f64, transform: Option<&str>, opacity: Option<f64>) -> String {
        let mut props = Vec::with_capacity(3);
        props.push(format!("offset: {}", fmt_num(position)));
        if let Some(t) = transform {
            props.push(format!("transform: '{t}'"));
        }
        if let Some(o) = opacity {
            props.push(format!("opacity: {}", fmt_num(o)));
        }
        format!("  {{ {} }},", props.join(", "))
    }

    fn document(&self, entries: &[String], summary: &Summary) -> String {
        let origin = summary.origin_css();
        let duration = summary.realized_duration_ms;
        format!(
            "{comment}\n\nconst {KEYFRAMES_VAR} = [\n{body}\n];\n\n\
             // Example usage:\n\
             // const element = document.querySelector('{ELEMENT_SELECTOR}');\n\
             // element.style.transformOrigin = '{origin}';\n\
             // element.animate({KEYFRAMES_VAR}, {{\n\
             //   duration: {duration},\n\
             //   easing: 'linear',\n\
             //   fill: 'forwards'\n\
             // }});",
            comment = summary.comment(),
            body = entries.join("\n"),
        )
    }
}

/// Render the animation-object output for `sampled`.
pub fn emit_object(sampled: &SampledFrames, params: &ParameterRecord) -> EmittedKeyframes {
    emit(&ObjectKeyframes, sampled, params)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/object.rs"]
mod tests;
