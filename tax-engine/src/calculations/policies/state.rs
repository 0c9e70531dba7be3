//! State income tax for the supported jurisdictions.
//!
//! Pennsylvania taxes all income at a flat rate with no deduction. New York
//! runs a nine-tier progressive table with a standard deduction, the combined
//! 401(k) contributions, and a child deduction taken off the top.

use rust_decimal::Decimal;

use crate::calculations::policies::{PolicyBreakdown, ScheduleTax, TaxCategory};
use crate::calculations::schedule::Schedule;
use crate::error::{InputError, TaxError};
use crate::models::{StateCode, TaxYearRules};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTax {
    state: StateCode,
    inner: ScheduleTax,
}

impl StateTax {
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidInput`] for a negative income or 401(k)
    /// contribution.
    pub fn new(
        income: Decimal,
        contr401k: Decimal,
        state: StateCode,
        rules: &TaxYearRules,
    ) -> Result<Self, TaxError> {
        if contr401k < Decimal::ZERO {
            return Err(InputError::NegativeDeduction(contr401k).into());
        }

        let (schedule, deduction) = match state {
            StateCode::Pa => (Schedule::flat(rules.pa_income_tax_rate)?, Decimal::ZERO),
            StateCode::Ny => (
                Schedule::new(rules.ny_brackets.clone())?,
                rules.ny_standard_deduction + contr401k + rules.ny_child_deduction,
            ),
        };

        Ok(Self {
            state,
            inner: ScheduleTax::new(income, deduction, schedule)?,
        })
    }

    /// Builds the policy from a raw jurisdiction code.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::UnsupportedJurisdiction`] for any code outside
    /// PA and NY, plus everything [`StateTax::new`] rejects.
    pub fn for_code(
        income: Decimal,
        contr401k: Decimal,
        code: &str,
        rules: &TaxYearRules,
    ) -> Result<Self, TaxError> {
        let state = StateCode::from_code(code)?;
        Self::new(income, contr401k, state, rules)
    }

    pub fn state(&self) -> StateCode {
        self.state
    }

    pub fn liability(&self) -> Decimal {
        self.inner.liability()
    }

    pub fn taxable_income(&self) -> Decimal {
        self.inner.taxable_income()
    }

    pub fn breakdown(&self) -> PolicyBreakdown {
        self.inner.breakdown(TaxCategory::State)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rules() -> TaxYearRules {
        TaxYearRules::year_2024()
    }

    #[test]
    fn pa_taxes_all_income_at_flat_rate() {
        let tax = StateTax::new(dec!(100000), dec!(0), StateCode::Pa, &rules()).unwrap();

        assert_eq!(tax.liability(), dec!(3070.00));
    }

    #[test]
    fn pa_grants_no_deduction_for_401k() {
        let tax = StateTax::new(dec!(100000), dec!(20000), StateCode::Pa, &rules()).unwrap();

        assert_eq!(tax.taxable_income(), dec!(100000));
        assert_eq!(tax.liability(), dec!(3070.00));
    }

    #[test]
    fn ny_deducts_standard_401k_and_child_deduction() {
        let tax = StateTax::new(dec!(50000), dec!(10000), StateCode::Ny, &rules()).unwrap();

        // Taxable: 50000 - 16050 - 10000 - 1000 = 22950
        assert_eq!(tax.taxable_income(), dec!(22950));
        // 17150 × 4% + 5800 × 4.5%
        assert_eq!(tax.liability(), dec!(947.00));
    }

    #[test]
    fn ny_walks_the_upper_tiers() {
        let tax = StateTax::new(dec!(625476.22), dec!(46000), StateCode::Ny, &rules()).unwrap();

        assert_eq!(tax.taxable_income(), dec!(562426.22));
        assert_eq!(tax.liability(), dec!(34638.75));
    }

    #[test]
    fn zero_income_owes_nothing() {
        let pa = StateTax::new(dec!(0), dec!(0), StateCode::Pa, &rules()).unwrap();
        let ny = StateTax::new(dec!(0), dec!(0), StateCode::Ny, &rules()).unwrap();

        assert_eq!(pa.liability(), dec!(0));
        assert_eq!(ny.liability(), dec!(0));
    }

    #[test]
    fn for_code_accepts_supported_codes() {
        let tax = StateTax::for_code(dec!(100000), dec!(0), "PA", &rules()).unwrap();

        assert_eq!(tax.state(), StateCode::Pa);
    }

    #[test]
    fn for_code_rejects_unsupported_jurisdiction() {
        let result = StateTax::for_code(dec!(50000), dec!(0), "CA", &rules());

        assert_eq!(
            result,
            Err(TaxError::UnsupportedJurisdiction("CA".to_owned()))
        );
    }

    #[test]
    fn rejects_negative_income() {
        let result = StateTax::new(dec!(-50000), dec!(0), StateCode::Pa, &rules());

        assert_eq!(result, Err(InputError::NegativeIncome(dec!(-50000)).into()));
    }
}
