use std::path::Path;

use crate::foundation::error::{SpringError, SpringResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Immutable input to one generation call.
///
/// A record is a pure data model that can be:
/// - built programmatically (start from [`ParameterRecord::default`])
/// - loaded from JSON via [`ParameterRecord::from_path`]
///
/// Range checks live in [`ParameterRecord::validate`], which callers run
/// before handing the record to [`crate::generate()`].
pub struct ParameterRecord {
    /// Exponential decay rate of the oscillator envelope (> 0).
    pub damping: f64,
    /// Angular frequency of the oscillator (> 0).
    pub frequency: f64,
    /// Per-property gain applied to the oscillator amplitude.
    pub multipliers: Multipliers,
    /// Sampling stops once `|amplitude| * 100` falls to or below this value.
    pub amplitude_threshold_percent: f64,
    /// Nominal playback duration; does not affect sampling.
    pub css_duration_ms: u64,
    /// Transform origin in percent.
    pub transform_origin: TransformOrigin,
    /// Which channels are derived and emitted.
    pub enabled: EnabledProperties,
}

impl Default for ParameterRecord {
    fn default() -> Self {
        Self {
            damping: 3.0,
            frequency: 20.0,
            multipliers: Multipliers::default(),
            amplitude_threshold_percent: 0.2,
            css_duration_ms: 800,
            transform_origin: TransformOrigin::default(),
            enabled: EnabledProperties::standard(),
        }
    }
}

impl ParameterRecord {
    /// Parse a (possibly partial) JSON record; missing fields take defaults.
    pub fn from_json_str(s: &str) -> SpringResult<Self> {
        serde_json::from_str(s).map_err(|e| SpringError::config(format!("parse parameters: {e}")))
    }

    /// Read and parse a JSON parameter file.
    pub fn from_path(path: &Path) -> SpringResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            SpringError::config(format!("read parameters '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Caller-side range check. [`crate::generate()`] itself trusts these ranges.
    pub fn validate(&self) -> SpringResult<()> {
        if !self.damping.is_finite() || self.damping <= 0.0 {
            return Err(SpringError::validation("damping must be finite and > 0"));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SpringError::validation("frequency must be finite and > 0"));
        }
        if !self.amplitude_threshold_percent.is_finite() || self.amplitude_threshold_percent < 0.0
        {
            return Err(SpringError::validation(
                "amplitude_threshold_percent must be finite and >= 0",
            ));
        }
        self.multipliers.validate()?;
        if !self.transform_origin.x.is_finite() || !self.transform_origin.y.is_finite() {
            return Err(SpringError::validation("transform_origin must be finite"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Gains for each property family. Negative values invert direction.
pub struct Multipliers {
    /// Drives rotateX/rotateY and skewX/skewY, in degrees.
    pub rotation: f64,
    /// Drives translateX/translateY, in pixels.
    pub translation: f64,
    /// Drives scaleX/scaleY.
    pub scale: f64,
    /// Drives opacity.
    pub opacity: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            rotation: 20.0,
            translation: 3.0,
            scale: 0.2,
            opacity: 0.3,
        }
    }
}

impl Multipliers {
    fn validate(&self) -> SpringResult<()> {
        for (name, v) in [
            ("rotation", self.rotation),
            ("translation", self.translation),
            ("scale", self.scale),
            ("opacity", self.opacity),
        ] {
            if !v.is_finite() {
                return Err(SpringError::validation(format!(
                    "{name} multiplier must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Transform origin as a percentage pair.
pub struct TransformOrigin {
    /// Horizontal origin in percent.
    pub x: f64,
    /// Vertical origin in percent.
    pub y: f64,
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One of the nine animatable output channels.
pub enum Channel {
    /// Horizontal translation.
    TranslateX,
    /// Vertical translation.
    TranslateY,
    /// Rotation about the X axis.
    RotateX,
    /// Rotation about the Y axis.
    RotateY,
    /// Horizontal scale.
    ScaleX,
    /// Vertical scale.
    ScaleY,
    /// Horizontal skew.
    SkewX,
    /// Vertical skew.
    SkewY,
    /// Opacity.
    Opacity,
}

impl Channel {
    /// All channels in declaration order.
    pub const ALL: [Channel; 9] = [
        Channel::TranslateX,
        Channel::TranslateY,
        Channel::RotateX,
        Channel::RotateY,
        Channel::ScaleX,
        Channel::ScaleY,
        Channel::SkewX,
        Channel::SkewY,
        Channel::Opacity,
    ];

    /// CSS-facing channel name, e.g. `translateX`.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::RotateX => "rotateX",
            Self::RotateY => "rotateY",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::SkewX => "skewX",
            Self::SkewY => "skewY",
            Self::Opacity => "opacity",
        }
    }

    /// Parse a CSS-facing channel name.
    pub fn parse(s: &str) -> SpringResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.css_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SpringError::validation(format!("unknown channel '{s}'")))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Per-channel enable flags.
pub struct EnabledProperties {
    /// See [`Channel::TranslateX`].
    pub translate_x: bool,
    /// See [`Channel::TranslateY`].
    pub translate_y: bool,
    /// See [`Channel::RotateX`].
    pub rotate_x: bool,
    /// See [`Channel::RotateY`].
    pub rotate_y: bool,
    /// See [`Channel::ScaleX`].
    pub scale_x: bool,
    /// See [`Channel::ScaleY`].
    pub scale_y: bool,
    /// See [`Channel::SkewX`].
    pub skew_x: bool,
    /// See [`Channel::SkewY`].
    pub skew_y: bool,
    /// See [`Channel::Opacity`].
    pub opacity: bool,
}

impl EnabledProperties {
    /// Default mask: translation and rotation on both axes.
    pub fn standard() -> Self {
        Self {
            translate_x: true,
            translate_y: true,
            rotate_x: true,
            rotate_y: true,
            ..Self::none()
        }
    }

    /// Every channel disabled.
    pub fn none() -> Self {
        Self {
            translate_x: false,
            translate_y: false,
            rotate_x: false,
            rotate_y: false,
            scale_x: false,
            scale_y: false,
            skew_x: false,
            skew_y: false,
            opacity: false,
        }
    }

    /// Every channel enabled.
    pub fn all() -> Self {
        Self::from_channels(Channel::ALL)
    }

    /// Mask with exactly `channels` enabled.
    pub fn from_channels(channels: impl IntoIterator<Item = Channel>) -> Self {
        let mut out = Self::none();
        for c in channels {
            out.set(c, true);
        }
        out
    }

    /// Flag for one channel.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::TranslateX => self.translate_x,
            Channel::TranslateY => self.translate_y,
            Channel::RotateX => self.rotate_x,
            Channel::RotateY => self.rotate_y,
            Channel::ScaleX => self.scale_x,
            Channel::ScaleY => self.scale_y,
            Channel::SkewX => self.skew_x,
            Channel::SkewY => self.skew_y,
            Channel::Opacity => self.opacity,
        }
    }

    /// Set the flag for one channel.
    pub fn set(&mut self, channel: Channel, on: bool) {
        let slot = match channel {
            Channel::TranslateX => &mut self.translate_x,
            Channel::TranslateY => &mut self.translate_y,
            Channel::RotateX => &mut self.rotate_x,
            Channel::RotateY => &mut self.rotate_y,
            Channel::ScaleX => &mut self.scale_x,
            Channel::ScaleY => &mut self.scale_y,
            Channel::SkewX => &mut self.skew_x,
            Channel::SkewY => &mut self.skew_y,
            Channel::Opacity => &mut self.opacity,
        };
        *slot = on;
    }

    /// Enabled channels in [`Channel::ALL`] order.
    pub fn enabled_channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    /// At least one channel is enabled.
    pub fn any(&self) -> bool {
        Channel::ALL.into_iter().any(|c| self.is_enabled(c))
    }

    /// At least one channel maps to a transform function.
    pub fn any_transform(&self) -> bool {
        Channel::ALL
            .into_iter()
            .filter(|c| *c != Channel::Opacity)
            .any(|c| self.is_enabled(c))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/record.rs"]
mod tests;
