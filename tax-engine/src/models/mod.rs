mod bracket;
mod household_profile;
mod state;
mod tax_year_rules;

pub use bracket::Bracket;
pub use household_profile::{HouseholdProfile, TaxesPaid};
pub use state::StateCode;
pub use tax_year_rules::TaxYearRules;
