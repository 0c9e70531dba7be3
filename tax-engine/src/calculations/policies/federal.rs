//! Federal income tax over the married-filing-jointly bracket table.

use rust_decimal::Decimal;

use crate::calculations::policies::{PolicyBreakdown, ScheduleTax, TaxCategory};
use crate::calculations::schedule::Schedule;
use crate::error::{InputError, TaxError};
use crate::models::TaxYearRules;

/// Federal income tax: the standard deduction plus the household's combined
/// 401(k) contributions come off the top, the rest walks the federal table.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::FederalTax;
/// use tax_engine::models::TaxYearRules;
///
/// let rules = TaxYearRules::year_2024();
/// let tax = FederalTax::new(dec!(100000), dec!(20000), &rules).unwrap();
///
/// // Taxable: 100000 - 29200 - 20000 = 50800
/// // 23200 × 10% + 27600 × 12%
/// assert_eq!(tax.liability(), dec!(5632.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederalTax {
    inner: ScheduleTax,
}

impl FederalTax {
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidInput`] for a negative income or a negative
    /// 401(k) contribution.
    pub fn new(income: Decimal, contr401k: Decimal, rules: &TaxYearRules) -> Result<Self, TaxError> {
        if contr401k < Decimal::ZERO {
            return Err(InputError::NegativeDeduction(contr401k).into());
        }

        let schedule = Schedule::new(rules.federal_brackets.clone())?;
        let deduction = rules.federal_standard_deduction + contr401k;
        Ok(Self {
            inner: ScheduleTax::new(income, deduction, schedule)?,
        })
    }

    pub fn liability(&self) -> Decimal {
        self.inner.liability()
    }

    pub fn taxable_income(&self) -> Decimal {
        self.inner.taxable_income()
    }

    pub fn breakdown(&self) -> PolicyBreakdown {
        self.inner.breakdown(TaxCategory::Federal)
    }
}
