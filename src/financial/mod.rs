pub mod record;
pub mod service;

pub use record::{FinancialPatch, FinancialRecord};
pub use service::{get_financial, update_financial, validate_financial_patch, FinancialUpdateOutcome};
