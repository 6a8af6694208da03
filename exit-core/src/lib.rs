pub mod calculations;
pub mod data;
pub mod models;

pub use calculations::{
    CalculationError, LcgeCalculator, QsbsCalculator, calculate_lcge, calculate_qsbs,
    progressive_tax,
};
pub use models::*;
