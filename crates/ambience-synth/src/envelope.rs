//! Transient burst envelopes.
//!
//! Droplets, crackles, murmurs, chirps and thunder claps are all short shaped
//! events mixed additively into a longer background bed. A [`Burst`] describes
//! where the event sits and how loud it is; its [`BurstShape`] gives the
//! amplitude envelope; the caller supplies the excitation signal (noise,
//! filtered noise or a tone) sample by sample.

use std::f64::consts::PI;

/// Amplitude envelope of a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BurstShape {
    /// Instant onset followed by `exp(-j / (length * time_constant))`.
    ExpDecay {
        /// Decay time constant as a fraction of the burst length.
        time_constant: f64,
    },
    /// Smooth hump `sin(pi * j / length)`.
    HalfSine,
    /// Linear rise over `attack` samples, then exponential decay.
    AttackExpDecay {
        /// Attack length in samples.
        attack: usize,
        /// Decay time constant as a fraction of the burst length.
        time_constant: f64,
    },
}

impl BurstShape {
    /// Envelope gain at offset `j` of a burst `length` samples long.
    pub fn gain(&self, j: usize, length: usize) -> f64 {
        let j = j as f64;
        let length = length as f64;
        match *self {
            BurstShape::ExpDecay { time_constant } => (-j / (length * time_constant)).exp(),
            BurstShape::HalfSine => (PI * j / length).sin(),
            BurstShape::AttackExpDecay {
                attack,
                time_constant,
            } => {
                let attack = attack as f64;
                if j < attack {
                    j / attack
                } else {
                    (-(j - attack) / (length * time_constant)).exp()
                }
            }
        }
    }
}

/// A transient event placed in a sample buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    /// First sample index covered by the burst.
    pub start: usize,
    /// Length in samples.
    pub length: usize,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Envelope shape.
    pub shape: BurstShape,
}

impl Burst {
    /// Creates a new burst.
    pub fn new(start: usize, length: usize, amplitude: f64, shape: BurstShape) -> Self {
        Self {
            start,
            length,
            amplitude,
            shape,
        }
    }

    /// Mixes the burst into `out`, adding `gain * amplitude * excitation(j)`.
    ///
    /// The burst is truncated at the end of the buffer and `excitation` is
    /// only called for offsets that land inside it. Nothing is clamped; bursts
    /// accumulate on top of whatever is already in the buffer.
    ///
    /// # Returns
    /// The number of samples actually written.
    pub fn mix_into<F>(&self, out: &mut [f64], mut excitation: F) -> usize
    where
        F: FnMut(usize) -> f64,
    {
        let available = out.len().saturating_sub(self.start);
        let count = self.length.min(available);
        if count == 0 {
            return 0;
        }

        for (j, sample) in out[self.start..self.start + count].iter_mut().enumerate() {
            *sample += self.shape.gain(j, self.length) * self.amplitude * excitation(j);
        }

        count
    }
}
