use crate::types::{BmiCategory, BmiError, BmiReport, BmiResult};

/// A validated weight/height pair.
///
/// Both values are strictly positive for the lifetime of the value; this is
/// checked once in [`HumanBmi::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HumanBmi {
    weight_in_kilograms: f64,
    height_in_meters: f64,
}

impl HumanBmi {
    /// Fails with [`BmiError::InvalidArgument`] when either value is not
    /// a finite, strictly positive number (zero, NaN and infinities included).
    pub fn new(weight_in_kilograms: f64, height_in_meters: f64) -> BmiResult<Self> {
        if !is_positive(weight_in_kilograms) || !is_positive(height_in_meters) {
            log::debug!(
                "rejected measurement: weight={} height={}",
                weight_in_kilograms,
                height_in_meters
            );
            return Err(BmiError::InvalidArgument);
        }

        Ok(Self {
            weight_in_kilograms,
            height_in_meters,
        })
    }

    pub fn weight_in_kilograms(&self) -> f64 {
        self.weight_in_kilograms
    }

    pub fn height_in_meters(&self) -> f64 {
        self.height_in_meters
    }

    pub fn calculate_bmi(&self) -> f64 {
        self.weight_in_kilograms / (self.height_in_meters * self.height_in_meters)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.calculate_bmi())
    }

    pub fn report(&self) -> BmiReport {
        let bmi = self.calculate_bmi();
        BmiReport {
            weight_in_kilograms: self.weight_in_kilograms,
            height_in_meters: self.height_in_meters,
            bmi,
            category: BmiCategory::from_bmi(bmi),
        }
    }
}

// rejects NaN and both infinities as well as zero and negatives
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
