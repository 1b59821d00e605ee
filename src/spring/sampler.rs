use crate::{
    foundation::core::{Fps, FrameIndex, HORIZON_SECS, SAMPLE_FPS},
    params::record::{Multipliers, ParameterRecord},
    spring::oscillator::Oscillator,
    transform::compose::TransformValues,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One sampled point of the spring, with its derived transform values.
pub struct Frame {
    /// Sample time in seconds.
    pub time_s: f64,
    /// Zero-based sample index.
    pub index: FrameIndex,
    /// Raw oscillator amplitude at `time_s`.
    pub amplitude: f64,
    /// Rounded transform values derived from `amplitude`.
    pub values: TransformValues,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Materialized, time-ordered frame sequence from one sampling run.
pub struct SampledFrames {
    /// Frames in strictly increasing time order.
    pub frames: Vec<Frame>,
    /// The stop predicate fired before the horizon was reached.
    pub stopped_early: bool,
}

impl SampledFrames {
    /// Time of the last frame, or 0 when empty.
    pub fn last_time_s(&self) -> f64 {
        self.frames.last().map_or(0.0, |f| f.time_s)
    }

    /// Realized timeline length in whole milliseconds (rounded up).
    pub fn realized_duration_ms(&self) -> u64 {
        (self.last_time_s() * 1000.0).ceil() as u64
    }

    /// Number of sampled frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// No frame was sampled.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
/// Fixed-step time iterator over `[0, end)` frames.
///
/// Time advances by adding one frame duration per step, so frame `k` carries
/// the accumulated sum rather than `k / fps`. The frame count alone bounds the
/// iteration.
pub struct March {
    step: f64,
    time: f64,
    next: u64,
    end: u64,
}

impl March {
    /// March at `fps` for `end` frames.
    pub fn new(fps: Fps, end: u64) -> Self {
        Self {
            step: fps.frame_duration_secs(),
            time: 0.0,
            next: 0,
            end,
        }
    }

    /// March at the fixed sample rate up to the sampling horizon.
    pub fn horizon() -> Self {
        Self::new(SAMPLE_FPS, SAMPLE_FPS.secs_to_frames(HORIZON_SECS))
    }
}

impl Iterator for March {
    type Item = (FrameIndex, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let item = (FrameIndex(self.next), self.time);
        self.next += 1;
        self.time += self.step;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.end.saturating_sub(self.next)).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

/// Sample `params` until the amplitude threshold or the horizon is reached.
pub fn sample_frames(params: &ParameterRecord) -> SampledFrames {
    let threshold = params.amplitude_threshold_percent;
    let osc = Oscillator::new(params.damping, params.frequency);
    sample_with(osc, &params.multipliers, March::horizon(), |amp| {
        let pct = amp.abs() * 100.0;
        let stop = pct <= threshold;
        if stop {
            let amplitude_pct = format!("{pct:.2}");
            tracing::debug!(
                %amplitude_pct,
                threshold,
                "amplitude at or below stop threshold"
            );
        }
        stop
    })
}

/// Sample along `march`, excluding and stopping at the first frame for which
/// `stop(amplitude)` holds.
pub fn sample_with<F>(
    osc: Oscillator,
    multipliers: &Multipliers,
    march: March,
    mut stop: F,
) -> SampledFrames
where
    F: FnMut(f64) -> bool,
{
    let mut stopped_early = false;
    let frames = march
        .map_while(|(index, time_s)| {
            let amplitude = osc.amplitude(time_s);
            if stop(amplitude) {
                stopped_early = true;
                return None;
            }
            Some(Frame {
                time_s,
                index,
                amplitude,
                values: TransformValues::compose(amplitude, multipliers),
            })
        })
        .collect();

    SampledFrames {
        frames,
        stopped_early,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spring/sampler.rs"]
mod tests;
