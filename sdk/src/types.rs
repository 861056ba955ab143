use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{NORMAL_THRESHOLD, OVERWEIGHT_THRESHOLD, UNDERWEIGHT_THRESHOLD};

pub type BmiResult<T> = Result<T, BmiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    #[error("Weight and height must be positive values.")]
    InvalidArgument,
}

/// BMI category, ordered from lowest to highest band
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Thresholds are compared with strict less-than,
    /// so a value sitting exactly on a threshold belongs to the higher band.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_THRESHOLD {
            BmiCategory::Underweight
        } else if bmi < NORMAL_THRESHOLD {
            BmiCategory::Normal
        } else if bmi < OVERWEIGHT_THRESHOLD {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "UNDERWEIGHT",
            BmiCategory::Normal => "NORMAL",
            BmiCategory::Overweight => "OVERWEIGHT",
            BmiCategory::Obese => "OBESE",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub weight_in_kilograms: f64,
    pub height_in_meters: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_first_threshold_is_underweight() {
        assert_eq!(BmiCategory::from_bmi(12.5), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.499), BmiCategory::Underweight);
    }

    #[test]
    fn thresholds_belong_to_the_higher_band() {
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn just_below_thresholds_stays_in_lower_band() {
        assert_eq!(BmiCategory::from_bmi(24.999_999), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(29.999_999), BmiCategory::Overweight);
    }

    #[test]
    fn large_values_are_obese() {
        assert_eq!(BmiCategory::from_bmi(45.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(f64::INFINITY), BmiCategory::Obese);
    }

    #[test]
    fn categories_are_ordered() {
        assert!(BmiCategory::Underweight < BmiCategory::Normal);
        assert!(BmiCategory::Normal < BmiCategory::Overweight);
        assert!(BmiCategory::Overweight < BmiCategory::Obese);
    }

    #[test]
    fn category_never_decreases_as_bmi_grows() {
        let mut previous = BmiCategory::from_bmi(0.0);
        let mut bmi = 0.0;
        while bmi < 50.0 {
            let current = BmiCategory::from_bmi(bmi);
            assert!(current >= previous, "category dropped at bmi {bmi}");
            previous = current;
            bmi += 0.05;
        }
    }

    #[test]
    fn display_uses_upper_case_tag() {
        assert_eq!(BmiCategory::Normal.to_string(), "NORMAL");
        assert_eq!(BmiCategory::Overweight.to_string(), "OVERWEIGHT");
    }

    #[test]
    fn invalid_argument_message() {
        assert_eq!(
            BmiError::InvalidArgument.to_string(),
            "Weight and height must be positive values."
        );
    }

    #[test]
    fn invalid_argument_is_the_only_error_kind() {
        let err = BmiError::InvalidArgument;
        match err {
            BmiError::InvalidArgument => {}
        }
    }
}
