//! Ambience CLI library.
//!
//! This crate provides the command implementations behind the `ambience`
//! binary: batch rendering of the soundscape set, listing, and WAV inspection.

pub mod commands;
