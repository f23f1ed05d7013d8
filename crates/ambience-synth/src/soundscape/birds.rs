//! Birds: a very quiet rustle with sliding sine chirps scattered on top.
//!
//! Chirp placement is independent per chirp, so chirps may overlap and read
//! as several birds calling at once.

use std::f64::consts::PI;

use crate::envelope::{Burst, BurstShape};
use crate::filter::OnePoleFilter;
use crate::format::AudioFormat;
use crate::rng::SampleSource;

const MIN_CHIRPS: usize = 18;
const CHIRP_COUNT_SPAN: usize = 12;
/// Chirps never start within this many samples of the end.
const START_HEADROOM: usize = 8000;

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let num_samples = format.num_samples();
    let sample_rate = format.sample_rate_f64();
    let mut rustle = OnePoleFilter::with_coefficient(0.95);

    let mut out: Vec<f64> = (0..num_samples)
        .map(|_| rustle.process(source.bipolar()) * 0.05)
        .collect();

    let num_chirps = source.index(MIN_CHIRPS, CHIRP_COUNT_SPAN);
    for _ in 0..num_chirps {
        let start = source.index(0, num_samples.saturating_sub(START_HEADROOM));
        let length = source.index(800, 3000);
        let base_freq = source.range(1800.0, 3000.0);
        let freq_slide = (source.unit() - 0.5) * 2000.0;
        let amplitude = source.range(0.15, 0.25);

        let chirp = Burst::new(start, length, amplitude, BurstShape::HalfSine);
        chirp.mix_into(&mut out, |j| {
            let progress = j as f64 / length as f64;
            let freq = base_freq + freq_slide * progress;
            let t = j as f64 / sample_rate;
            (2.0 * PI * freq * t).sin()
        });
    }

    out
}
