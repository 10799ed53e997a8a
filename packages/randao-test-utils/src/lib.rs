//! Shared test fixtures for the RANDAO accessor crates.

pub mod fixtures;
