//! Wind: heavily filtered noise under two slow, detuned sine gusts.

use std::f64::consts::PI;

use crate::filter::OnePoleFilter;
use crate::format::AudioFormat;
use crate::rng::SampleSource;

/// Gust modulation at time `t`, within `[0.3, 1.0]`.
fn gust(t: f64) -> f64 {
    let slow = ((2.0 * PI * 0.1 * t).sin() + 1.0) / 2.0;
    let slower = ((2.0 * PI * 0.07 * t + 1.3).sin() + 1.0) / 2.0;
    0.3 + 0.35 * slow + 0.35 * slower
}

pub(super) fn generate<S: SampleSource>(format: &AudioFormat, source: &mut S) -> Vec<f64> {
    let mut lowpass = OnePoleFilter::with_coefficient(0.92);
    (0..format.num_samples())
        .map(|i| lowpass.process(source.bipolar()) * gust(format.time_of(i)) * 0.45)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gust_range() {
        for i in 0..10_000 {
            let g = gust(i as f64 * 0.01);
            assert!((0.3..=1.0).contains(&g), "gust {} at {}", g, i);
        }
        // At t=0: 0.3 + 0.35*0.5 + 0.35*(sin(1.3)+1)/2
        let expected = 0.3 + 0.175 + 0.35 * ((1.3f64).sin() + 1.0) / 2.0;
        assert!((gust(0.0) - expected).abs() < 1e-12);
    }
}
