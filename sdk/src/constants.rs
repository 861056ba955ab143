// upper bounds (exclusive) of each band
pub const UNDERWEIGHT_THRESHOLD: f64 = 18.5;
pub const NORMAL_THRESHOLD: f64 = 25.0;
pub const OVERWEIGHT_THRESHOLD: f64 = 30.0;
