mod currency;
mod jurisdiction;
mod lcge;
mod qsbs;
mod scenario;
mod tax_bracket;

pub use currency::Currency;
pub use jurisdiction::Jurisdiction;
pub use lcge::LcgeCalculation;
pub use qsbs::QsbsCalculation;
pub use scenario::ExitScenario;
pub use tax_bracket::TaxBracket;
