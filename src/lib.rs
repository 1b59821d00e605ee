//! springkey turns a damped spring into ready-to-paste keyframes.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `ParameterRecord -> SampledFrames` (oscillator evaluated at 60 fps
//!    until the amplitude threshold or the 10 s horizon)
//! 2. **Compose**: each amplitude becomes rounded `TransformValues`
//! 3. **Emit**: one shared walk renders a CSS `@keyframes` block and a Web
//!    Animations keyframe list from the same frames
//!
//! Every call is pure: no state survives between [`generate`] calls.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod emit;
mod foundation;
mod generate;
mod params;
mod spring;
mod transform;

pub use emit::css::{CssKeyframes, binding_rule, emit_css, playback_rule};
pub use emit::object::{ObjectKeyframes, emit_object};
pub use emit::summary::{Summary, property_families};
pub use emit::walk::{EmittedKeyframes, KeyframeFormat, emit, walk_entries};
pub use emit::{ANIMATING_SELECTOR, ANIMATION_NAME, ELEMENT_SELECTOR, KEYFRAMES_VAR};
pub use foundation::core::{Fps, FrameIndex, HORIZON_SECS, SAMPLE_FPS, fmt_num};
pub use foundation::error::{SpringError, SpringResult};
pub use generate::{GenerationResult, generate};
pub use params::record::{Channel, EnabledProperties, Multipliers, ParameterRecord, TransformOrigin};
pub use spring::oscillator::{Oscillator, amplitude};
pub use spring::sampler::{Frame, March, SampledFrames, sample_frames, sample_with};
pub use transform::compose::TransformValues;
pub use transform::round::{Unit, round_by_unit, round_to};
pub use transform::serialize::{NO_TRANSFORM, transform_string};
