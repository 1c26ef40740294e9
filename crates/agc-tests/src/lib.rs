//! Integration tests for the AGC-RS crates.
//!
//! This crate contains end-to-end tests that exercise the full
//! decompose -> remap -> recombine pipeline across `agc-core` and
//! `agc-ops`.
