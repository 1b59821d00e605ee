use crate::{
    foundation::core::fmt_num,
    params::record::EnabledProperties,
    transform::compose::TransformValues,
};

/// Identity transform keyword used by synthetic terminal keyframes.
pub const NO_TRANSFORM: &str = "none";

/// Combined CSS transform functions for the enabled channels.
///
/// Order is fixed: translate, rotateX, rotateY, scale, skewX, skewY.
/// Returns `None` when no enabled channel maps to a transform function;
/// callers omit the transform declaration in that case.
pub fn transform_string(v: &TransformValues, enabled: &EnabledProperties) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(6);

    if enabled.translate_x || enabled.translate_y {
        let x = if enabled.translate_x {
            format!("{}px", fmt_num(v.translate_x))
        } else {
            "0px".to_string()
        };
        let y = if enabled.translate_y {
            format!("{}px", fmt_num(v.translate_y))
        } else {
            "0px".to_string()
        };
        parts.push(format!("translate({x}, {y})"));
    }

    if enabled.rotate_x {
        parts.push(format!("rotateX({}deg)", fmt_num(v.rotate_x)));
    }
    if enabled.rotate_y {
        parts.push(format!("rotateY({}deg)", fmt_num(v.rotate_y)));
    }

    match (enabled.scale_x, enabled.scale_y) {
        (true, true) => parts.push(format!(
            "scale({}, {})",
            fmt_num(v.scale_x),
            fmt_num(v.scale_y)
        )),
        (true, false) => parts.push(format!("scaleX({})", fmt_num(v.scale_x))),
        (false, true) => parts.push(format!("scaleY({})", fmt_num(v.scale_y))),
        (false, false) => {}
    }

    if enabled.skew_x {
        parts.push(format!("skewX({}deg)", fmt_num(v.skew_x)));
    }
    if enabled.skew_y {
        parts.push(format!("skewY({}deg)", fmt_num(v.skew_y)));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/serialize.rs"]
mod tests;
