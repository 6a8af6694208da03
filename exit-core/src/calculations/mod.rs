//! Tax computation engines and shared helpers.
//!
//! Two side-by-side engines compare the US QSBS exclusion with the Canadian
//! Lifetime Capital Gains Exemption for the same hypothetical exit. Both are
//! single-pass pure functions over the static reference tables in
//! [`crate::data`]; the only failure mode is an unrecognized jurisdiction
//! code.

pub mod common;
pub mod fx;
pub mod lcge;
pub mod progressive;
pub mod qsbs;

pub use common::CalculationError;
pub use fx::{USD_TO_CAD_RATE, cad_to_usd, usd_to_cad};
pub use lcge::{LcgeCalculator, calculate_lcge};
pub use progressive::progressive_tax;
pub use qsbs::{QsbsCalculator, calculate_qsbs};
