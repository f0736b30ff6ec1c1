//! Typed access to the flat string parameter map.
//!
//! Hardware descriptions carry parameters as strings; plugins parse them
//! once at initialization. A missing key or unparsable value is a structured
//! [`HwError`], never a panic.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::HwError;

/// Parse the parameter under `key` as a `T`.
///
/// Returns [`HwError::MissingParameter`] if the key is absent and
/// [`HwError::InvalidParameter`] if the value does not parse.
pub fn parse<T>(parameters: &HashMap<String, String>, key: &str) -> Result<T, HwError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = parameters
        .get(key)
        .ok_or_else(|| HwError::MissingParameter(key.to_owned()))?;
    raw.parse().map_err(|e: T::Err| HwError::InvalidParameter {
        key: key.to_owned(),
        message: format!("'{raw}' is not valid: {e}"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
