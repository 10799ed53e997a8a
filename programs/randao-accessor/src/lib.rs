#![doc = include_str!("../README.md")]
#![deny(clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod observability;
pub mod runners;
