//! Normalized response curves
//!
//! Each curve divides `value` by `max_value` and maps the result into
//! `[0, 1]`. Game systems use them to turn stats into weights: hunger into
//! urgency, distance into falloff, and so on. Pass `1.0` as `max_value`
//! when the input is already normalized.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::util::clamp;

/// Clamp into `[0, 1]`, with NaN treated as below every bound
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        clamp(value, 0.0, 1.0)
    }
}

/// Odds ratio `n / (1 - n)` shared by the sigmoid pair
fn odds(value: f64, max_value: f64) -> f64 {
    let n = value / max_value;
    n / (1.0 - n)
}

/// Low becomes high, high becomes low.
pub fn normalized_inverse_sigmoid(value: f64, max_value: f64) -> f64 {
    clamp_unit(1.0 / (1.0 + odds(value, max_value).powi(3)))
}

/// Low stays low, high stays high, with a steep middle.
pub fn normalized_sigmoid(value: f64, max_value: f64) -> f64 {
    clamp_unit(1.0 / (1.0 + odds(value, max_value).powi(-3)))
}

/// Low stays low, high stays high. `n²`
pub fn normalized_exponential(value: f64, max_value: f64) -> f64 {
    let n = value / max_value;
    clamp_unit(n * n)
}

/// Low becomes high, high becomes low. `1 - n²`
pub fn normalized_inverse_exponential(value: f64, max_value: f64) -> f64 {
    let n = value / max_value;
    clamp_unit(1.0 - n * n)
}

/// Low stays low, high stays high. Rises fast at first and flattens out
/// near the top.
pub fn normalized_parabolic(value: f64, max_value: f64) -> f64 {
    let n = value / max_value;
    clamp_unit(1.0 - (n - 1.0) * (n - 1.0))
}

/// Zero at both ends with a peak of 0.25 at the midpoint.
pub fn normalized_quadratic(value: f64, max_value: f64) -> f64 {
    let n = value / max_value;
    clamp_unit(n - n * n)
}

/// Named curve shapes, parseable from kebab-case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Sigmoid,
    InverseSigmoid,
    Exponential,
    InverseExponential,
    Parabolic,
    Quadratic,
}

impl Curve {
    pub const ALL: [Curve; 6] = [
        Curve::Sigmoid,
        Curve::InverseSigmoid,
        Curve::Exponential,
        Curve::InverseExponential,
        Curve::Parabolic,
        Curve::Quadratic,
    ];

    pub fn apply(&self, value: f64, max_value: f64) -> f64 {
        match self {
            Curve::Sigmoid => normalized_sigmoid(value, max_value),
            Curve::InverseSigmoid => normalized_inverse_sigmoid(value, max_value),
            Curve::Exponential => normalized_exponential(value, max_value),
            Curve::InverseExponential => normalized_inverse_exponential(value, max_value),
            Curve::Parabolic => normalized_parabolic(value, max_value),
            Curve::Quadratic => normalized_quadratic(value, max_value),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::Sigmoid => "sigmoid",
            Curve::InverseSigmoid => "inverse-sigmoid",
            Curve::Exponential => "exponential",
            Curve::InverseExponential => "inverse-exponential",
            Curve::Parabolic => "parabolic",
            Curve::Quadratic => "quadratic",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown curve '{0}' (expected one of: sigmoid, inverse-sigmoid, exponential, inverse-exponential, parabolic, quadratic)")]
pub struct ParseCurveError(String);

impl FromStr for Curve {
    type Err = ParseCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Curve::ALL
            .into_iter()
            .find(|curve| curve.as_str() == normalized)
            .ok_or_else(|| ParseCurveError(s.to_string()))
    }
}
