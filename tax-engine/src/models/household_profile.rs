use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StateCode;

/// Amounts already withheld or paid, per tax category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxesPaid {
    pub federal: Decimal,
    pub state: Decimal,
    pub local: Decimal,
    pub social_security: Decimal,
    pub medicare: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub income1: Decimal,
    pub income2: Decimal,
    pub other_income: Decimal,
    pub contr401k1: Decimal,
    pub contr401k2: Decimal,
    pub state: StateCode,
    pub taxes_paid: TaxesPaid,
}
