use serde::{Deserialize, Serialize};
use std::fmt;

/// A float bounded to [0, 1]: sentiment, growth potential, confidence and
/// trend indicators all use it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitScore(f64);

impl UnitScore {
    pub fn new(value: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("Score must be between 0.0 and 1.0, got {value}"));
        }
        Ok(UnitScore(value))
    }

    /// Clamps out-of-range input instead of rejecting it. NaN becomes 0.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return UnitScore(0.0);
        }
        UnitScore(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl TryFrom<f64> for UnitScore {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        UnitScore::new(value)
    }
}

impl From<UnitScore> for f64 {
    fn from(score: UnitScore) -> Self {
        score.0
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(UnitScore::new(1.2).is_err());
        assert!(UnitScore::new(-0.1).is_err());
        assert!(UnitScore::new(f64::NAN).is_err());
        assert_eq!(UnitScore::new(0.0).unwrap().value(), 0.0);
        assert_eq!(UnitScore::new(1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn test_saturating() {
        assert_eq!(UnitScore::saturating(3.0).value(), 1.0);
        assert_eq!(UnitScore::saturating(-2.0).value(), 0.0);
        assert_eq!(UnitScore::saturating(f64::NAN).value(), 0.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: UnitScore = serde_json::from_str("0.25").unwrap();
        assert_eq!(ok.value(), 0.25);
        assert!(serde_json::from_str::<UnitScore>("1.5").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "0.25");
    }
}
