//! Repair of decimal-degree strings whose decimal point was corrupted.
//!
//! Raw `Lat`/`Long` cells arrive with the dot missing ("12345") or
//! duplicated ("12.3.45"). Every dot is dropped, the digits are read as an
//! integer and four implied fractional digits are restored by dividing by
//! [`COORDINATE_SCALE`].

use crate::error::{CaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Divisor that restores the four implied fractional digits.
pub const COORDINATE_SCALE: f64 = 10_000.0;

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value in degrees for this axis.
    pub fn limit(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Check that `degrees` is inside the valid range for this axis.
    pub fn check(&self, degrees: f64, raw: &str) -> Result<f64> {
        if degrees.is_finite() && degrees.abs() <= self.limit() {
            Ok(degrees)
        } else {
            Err(CaseError::InvalidCoordinate {
                axis: *self,
                raw: raw.to_string(),
                reason: format!("{} is outside [-{limit}, {limit}]", degrees, limit = self.limit()),
            })
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

fn invalid(axis: Axis, raw: &str, reason: &str) -> CaseError {
    CaseError::InvalidCoordinate {
        axis,
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}

/// Normalize a raw coordinate string into signed decimal degrees.
///
/// ```
/// use cgd_cases::coordinate::{normalize_coordinate, Axis};
///
/// assert_eq!(normalize_coordinate("12.3.45", Axis::Latitude).unwrap(), 1.2345);
/// assert_eq!(normalize_coordinate("-1234567", Axis::Longitude).unwrap(), -123.4567);
/// ```
pub fn normalize_coordinate(raw: &str, axis: Axis) -> Result<f64> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = unsigned.chars().filter(|c| *c != '.').collect();
    if digits.is_empty() {
        return Err(invalid(axis, raw, "no digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(axis, raw, "unexpected characters"));
    }

    let magnitude = digits
        .parse::<u64>()
        .map_err(|e| invalid(axis, raw, &e.to_string()))?;
    let degrees = magnitude as f64 / COORDINATE_SCALE;
    let signed = if negative { -degrees } else { degrees };
    axis.check(signed, raw)
}

/// Format degrees the way the cleaned output file stores them.
///
/// Four fractional digits, so feeding the result back through
/// [`normalize_coordinate`] yields the same value.
pub fn canonical_coordinate(degrees: f64) -> String {
    format!("{:.4}", degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_every_dot() {
        assert_eq!(normalize_coordinate("12345", Axis::Latitude).unwrap(), 1.2345);
        assert_eq!(normalize_coordinate("1.2.3.4.5", Axis::Latitude).unwrap(), 1.2345);
        assert_eq!(normalize_coordinate("33.9391", Axis::Latitude).unwrap(), 33.9391);
    }

    #[test]
    fn test_keeps_sign() {
        assert_eq!(normalize_coordinate("-41.1.129", Axis::Latitude).unwrap(), -41.1129);
        assert_eq!(normalize_coordinate("+677.090", Axis::Longitude).unwrap(), 67.709);
        assert_eq!(normalize_coordinate("+67.709", Axis::Longitude).unwrap(), 6.7709);
        assert_eq!(normalize_coordinate("  -0.5000 ", Axis::Longitude).unwrap(), -0.5);
    }

    #[test]
    fn test_out_of_range() {
        // five fractional digits restore to 339.39, which is not a latitude
        let err = normalize_coordinate("33.93911", Axis::Latitude).unwrap_err();
        assert!(matches!(
            err,
            CaseError::InvalidCoordinate {
                axis: Axis::Latitude,
                ..
            }
        ));
        assert!(normalize_coordinate("1800001", Axis::Longitude).is_err());
        assert_eq!(normalize_coordinate("1800000", Axis::Longitude).unwrap(), 180.0);
        assert_eq!(normalize_coordinate("-900000", Axis::Latitude).unwrap(), -90.0);
    }

    #[test]
    fn test_malformed() {
        assert!(normalize_coordinate("", Axis::Latitude).is_err());
        assert!(normalize_coordinate("-", Axis::Latitude).is_err());
        assert!(normalize_coordinate("...", Axis::Latitude).is_err());
        assert!(normalize_coordinate("12,5", Axis::Latitude).is_err());
        assert!(normalize_coordinate("--12", Axis::Latitude).is_err());
        assert!(normalize_coordinate("N12", Axis::Latitude).is_err());
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        for raw in ["12.3.45", "-1234567", "0", "899999", "-17.9.9.9.9"] {
            let axis = Axis::Longitude;
            let first = normalize_coordinate(raw, axis).unwrap();
            assert_eq!(normalize_coordinate(raw, axis).unwrap(), first);
            let canonical = canonical_coordinate(first);
            assert_eq!(normalize_coordinate(&canonical, axis).unwrap(), first);
            assert_eq!(canonical_coordinate(first), canonical);
        }
    }
}
