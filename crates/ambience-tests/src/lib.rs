//! Ambience End-to-End Test Infrastructure
//!
//! Integration tests for the generator as a whole:
//!
//! - Generation: CLI options -> eight WAV files on disk
//! - Conformance: files decode with an independent reader (`hound`)
//! - Isolation: one unwritable target does not stop the batch
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ambience-tests
//! ```

pub mod harness;

pub use harness::{CliResult, DecodedWav, TestHarness};
