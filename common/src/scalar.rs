//! # Loosely Typed Attribute Values
//!
//! Topology builders hand us attributes that come from YAML labels, command
//! line arguments or other tools, so a "number" may arrive as an integer, a
//! float or a string. [`Scalar`] carries such a value until a field-specific
//! rule turns it into a typed one.
//!
//! ## Parsing policy
//! Coercion is **permissive**: malformed or absent input never produces an
//! error and never falls back to zero. It resolves to `None`, which callers
//! treat as "unset". Zero is a valid level and a valid coordinate, so it must
//! stay distinguishable from "no value".

use std::fmt;

/// A raw attribute value as supplied by a topology builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Reads the value as a hierarchical graph level.
    ///
    /// * integers are taken as is,
    /// * finite floats are truncated toward zero,
    /// * strings must hold an integer (surrounding whitespace is ignored).
    ///
    /// `"3.0"` is *not* a level, only `"3"` is.
    pub fn as_level(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            Scalar::Float(value) => truncate(*value),
            Scalar::Text(text) => text.trim().parse::<i64>().ok(),
        }
    }

    /// Reads the value as a diagram coordinate or dimension.
    ///
    /// Anything float-like is accepted and truncated toward zero, so `"3.7"`
    /// becomes `3` and `"-2.5"` becomes `-2`. Empty strings are unset.
    pub fn as_coordinate(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            Scalar::Float(value) => truncate(*value),
            Scalar::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                text.parse::<f64>().ok().and_then(truncate)
            }
        }
    }
}

fn truncate(value: f64) -> Option<i64> {
    // NaN and infinities have no integer counterpart; huge values would saturate.
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

/// Applies [`Scalar::as_level`] to an optional raw value.
pub fn parse_level(raw: Option<&Scalar>) -> Option<i64> {
    raw.and_then(Scalar::as_level)
}

/// Applies [`Scalar::as_coordinate`] to an optional raw value.
pub fn parse_coordinate(raw: Option<&Scalar>) -> Option<i64> {
    raw.and_then(Scalar::as_coordinate)
}

/// Token written into style strings for values that are unset.
pub const UNSET_TOKEN: &str = "None";

/// Renders an optional integer for a style string, using [`UNSET_TOKEN`] when unset.
pub struct OptDisplay(pub Option<i64>);

impl fmt::Display for OptDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(UNSET_TOKEN),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}
