pub(crate) mod oscillator;
pub(crate) mod sampler;
