//! Thunder: a deep rumble with two to four long claps.

use crate::envelope::{Burst, BurstShape};
use crate::filter::OnePoleFilter;
use crate::format::AudioFormat;
use crate::noise::BrownNoise;
use crate::rng::SampleSource;

const CLAP_SHAPE: BurstShape = BurstShape::AttackExpDecay {
    attack: 800,
    time_constant: 0.35,
};

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let num_samples = format.num_samples();
    let mut brown = BrownNoise::new(0.01, 0.999);
    let mut rumble = OnePoleFilter::with_coefficient(0.96);

    let mut out: Vec<f64> = (0..num_samples)
        .map(|_| rumble.process(brown.next_sample(source)) * 0.2)
        .collect();

    // Claps start at least one second before the end.
    let latest_start = num_samples.saturating_sub(format.sample_rate as usize);

    let num_claps = source.index(2, 3);
    for _ in 0..num_claps {
        let start = source.index(0, latest_start);
        let length = source.index(20_000, 30_000);
        let amplitude = source.range(0.5, 0.4);
        let mut burst_lowpass = OnePoleFilter::with_coefficient(0.88);

        Burst::new(start, length, amplitude, CLAP_SHAPE)
            .mix_into(&mut out, |_| burst_lowpass.process(source.bipolar()));
    }

    out
}
