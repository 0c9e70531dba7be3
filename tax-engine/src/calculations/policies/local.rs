//! Local income tax: a flat single-bracket levy on total income.

use rust_decimal::Decimal;

use crate::calculations::policies::{PolicyBreakdown, ScheduleTax, TaxCategory};
use crate::calculations::schedule::Schedule;
use crate::error::TaxError;
use crate::models::{StateCode, TaxYearRules};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTax {
    state: StateCode,
    inner: ScheduleTax,
}

impl LocalTax {
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidInput`] for a negative income.
    pub fn new(income: Decimal, state: StateCode, rules: &TaxYearRules) -> Result<Self, TaxError> {
        let rate = match state {
            StateCode::Pa => rules.pa_local_rate,
            StateCode::Ny => rules.ny_local_rate,
        };
        let schedule = Schedule::flat(rate)?;

        Ok(Self {
            state,
            inner: ScheduleTax::new(income, Decimal::ZERO, schedule)?,
        })
    }

    /// Builds the policy from a raw jurisdiction code.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::UnsupportedJurisdiction`] for any code outside
    /// PA and NY, plus everything [`LocalTax::new`] rejects.
    pub fn for_code(income: Decimal, code: &str, rules: &TaxYearRules) -> Result<Self, TaxError> {
        let state = StateCode::from_code(code)?;
        Self::new(income, state, rules)
    }

    pub fn state(&self) -> StateCode {
        self.state
    }

    pub fn liability(&self) -> Decimal {
        self.inner.liability()
    }

    pub fn breakdown(&self) -> PolicyBreakdown {
        self.inner.breakdown(TaxCategory::Local)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::InputError;

    fn rules() -> TaxYearRules {
        TaxYearRules::year_2024()
    }

    #[test]
    fn pa_rate_is_one_percent() {
        let tax = LocalTax::new(dec!(100000), StateCode::Pa, &rules()).unwrap();

        assert_eq!(tax.liability(), dec!(1000.00));
    }

    #[test]
    fn ny_rate_is_four_percent() {
        let tax = LocalTax::new(dec!(100000), StateCode::Ny, &rules()).unwrap();

        assert_eq!(tax.liability(), dec!(4000.00));
    }

    #[test]
    fn liability_rounds_to_two_decimal_places() {
        let tax = LocalTax::new(dec!(123456.78), StateCode::Pa, &rules()).unwrap();

        // 123456.78 × 1% = 1234.5678
        assert_eq!(tax.liability(), dec!(1234.57));
    }

    #[test]
    fn for_code_rejects_unsupported_jurisdiction() {
        let result = LocalTax::for_code(dec!(50000), "TX", &rules());

        assert_eq!(
            result,
            Err(TaxError::UnsupportedJurisdiction("TX".to_owned()))
        );
    }

    #[test]
    fn rejects_negative_income() {
        let result = LocalTax::new(dec!(-1), StateCode::Ny, &rules());

        assert_eq!(result, Err(InputError::NegativeIncome(dec!(-1)).into()));
    }
}
