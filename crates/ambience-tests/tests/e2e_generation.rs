//! End-to-end generation tests.
//!
//! Renders the full soundscape set into a scratch directory and checks the
//! files with `hound` and with raw header reads.

use ambience_synth::wav::decode_pcm16;
use ambience_synth::{render, AudioFormat, Soundscape};
use ambience_tests::TestHarness;
use pretty_assertions::assert_eq;
use std::fs;

fn quick_format() -> AudioFormat {
    AudioFormat::new(22050, 1.0).unwrap()
}

#[test]
fn test_generates_exactly_the_eight_files() {
    let harness = TestHarness::new();
    let summary = harness.generate(quick_format(), 1);

    assert!(summary.is_success());
    assert_eq!(summary.written, 8);
    assert_eq!(
        harness.output_files(),
        vec![
            "birds.wav",
            "cafe.wav",
            "fire.wav",
            "forest.wav",
            "ocean.wav",
            "rain.wav",
            "thunder.wav",
            "wind.wav",
        ]
    );
}

#[test]
fn test_files_decode_with_hound() {
    let harness = TestHarness::new();
    let format = quick_format();
    harness.generate(format, 2);

    for sound in Soundscape::ALL {
        let wav = harness.read_wav(&sound.file_name());
        assert_eq!(wav.spec.channels, 1, "{}", sound);
        assert_eq!(wav.spec.sample_rate, 22050, "{}", sound);
        assert_eq!(wav.spec.bits_per_sample, 16, "{}", sound);
        assert_eq!(wav.spec.sample_format, hound::SampleFormat::Int, "{}", sound);
        assert_eq!(wav.samples.len(), format.num_samples(), "{}", sound);

        // Loop seam: both ends are exactly silent.
        assert_eq!(wav.samples[0], 0, "{} head", sound);
        assert_eq!(*wav.samples.last().unwrap(), 0, "{} tail", sound);
        assert!(wav.rms() > 1e-3, "{} is silent", sound);
    }
}

#[test]
fn test_raw_header_fields() {
    let harness = TestHarness::new();
    let format = AudioFormat::new(44100, 0.5).unwrap();
    harness.generate(format, 3);

    let bytes = fs::read(harness.out_dir().join("ocean.wav")).unwrap();
    let n = format.num_samples() as u32;
    let u16_at = |i: usize| u16::from_le_bytes([bytes[i], bytes[i + 1]]);
    let u32_at = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);

    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(u32_at(4), 36 + n * 2);
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(u32_at(16), 16);
    assert_eq!(u16_at(20), 1);
    assert_eq!(u16_at(22), 1);
    assert_eq!(u32_at(24), 44100);
    assert_eq!(u32_at(28), 88200);
    assert_eq!(u16_at(32), 2);
    assert_eq!(u16_at(34), 16);
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(u32_at(40), n * 2);
    assert_eq!(bytes.len() as u32, 44 + n * 2);
}

#[test]
fn test_default_format_length() {
    let format = AudioFormat::default();
    let result = render(Soundscape::Rain, &format, 11).unwrap();
    assert_eq!(result.wav.num_samples, 441_000);
    assert_eq!(result.wav.byte_len(), 44 + 882_000);
}

#[test]
fn test_forest_rms_band_across_seeds() {
    let format = AudioFormat::default();
    for seed in [1, 17, 4242, u32::MAX] {
        let result = render(Soundscape::Forest, &format, seed).unwrap();
        let samples = decode_pcm16(&result.wav.wav_data).unwrap();
        let rms = (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt();
        assert!(
            (0.05..=0.3).contains(&rms),
            "seed {}: forest rms {} out of band",
            seed,
            rms
        );
    }
}

#[test]
fn test_same_seed_is_byte_identical() {
    let a = TestHarness::new();
    let b = TestHarness::new();
    let c = TestHarness::new();
    let format = quick_format();

    let sa = a.generate(format, 77);
    let sb = b.generate(format, 77);
    let sc = c.generate(format, 78);

    for sound in Soundscape::ALL {
        let name = sound.file_name();
        let bytes_a = fs::read(a.out_dir().join(&name)).unwrap();
        let bytes_b = fs::read(b.out_dir().join(&name)).unwrap();
        assert!(bytes_a == bytes_b, "{} differs between identical runs", name);
    }

    let hashes = |s: &ambience_cli::commands::json_output::GenerationSummary| {
        s.files
            .iter()
            .map(|f| f.pcm_hash.clone().unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(hashes(&sa), hashes(&sb));
    for (x, y) in hashes(&sa).iter().zip(hashes(&sc).iter()) {
        assert_ne!(x, y);
    }
}

#[test]
fn test_rerun_overwrites_existing_files() {
    let harness = TestHarness::new();
    let format = quick_format();
    harness.generate(format, 5);
    let first = fs::read(harness.out_dir().join("wind.wav")).unwrap();

    harness.generate(format, 6);
    let second = fs::read(harness.out_dir().join("wind.wav")).unwrap();

    assert_eq!(first.len(), second.len());
    assert!(first != second);
}

#[test]
fn test_binary_generate_succeeds() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&[
        "generate",
        "--out-dir",
        "sounds",
        "--sample-rate",
        "8000",
        "--duration",
        "0.5",
        "--seed",
        "9",
    ]);

    result.assert_success();
    assert!(result.stdout.contains("rain.wav"));
    assert!(result.stdout.contains("OK"));
    assert_eq!(harness.output_files().len(), 8);
}
