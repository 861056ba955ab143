pub mod constants;
pub mod human_bmi;
pub mod types;

pub use human_bmi::*;
pub use types::*;
