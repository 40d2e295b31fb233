//! Shared building blocks for `topograph`.
//!
//! * [`scalar`]: loosely typed attribute values and their coercion rules.
//! * [`style`]: `key=value;` style fragments used by the diagram renderer.
//! * [`config`]: runtime switches and the diagram [`config::Theme`].

pub mod config;
pub mod scalar;
pub mod style;
