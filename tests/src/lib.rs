//! Scenario tests spanning the common and core crates.

mod classification;
mod fabric;
