//! Small helpers shared by the RANDAO accessor crates.

#![deny(clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

pub mod hex;

/// Ensure that a condition is true, otherwise return an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
