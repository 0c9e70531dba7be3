//! Payroll taxes: social security and Medicare.
//!
//! Neither fits the deduct-then-walk shape. Social security caps each
//! earner's wages independently before applying its flat rate, so the two
//! bases must be tracked separately rather than derived from the combined
//! income. Medicare is uncapped and adds a surtax on income above a
//! threshold.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::calculations::policies::{PolicyBreakdown, TaxCategory};
use crate::error::{InputError, TaxError};
use crate::models::TaxYearRules;

/// Social security tax with a per-earner wage cap.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::SocialSecurityTax;
/// use tax_engine::models::TaxYearRules;
///
/// let rules = TaxYearRules::year_2024();
/// let tax = SocialSecurityTax::new(dec!(200000), dec!(180000), &rules).unwrap();
///
/// // Both earners capped at 168600: (168600 + 168600) × 6.2%
/// assert_eq!(tax.liability(), dec!(20906.40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialSecurityTax {
    base1: Decimal,
    base2: Decimal,
    rate: Decimal,
    income: Decimal,
}

impl SocialSecurityTax {
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidInput`] for a negative income or a rate
    /// outside [0, 1].
    pub fn new(income1: Decimal, income2: Decimal, rules: &TaxYearRules) -> Result<Self, TaxError> {
        if income1 < Decimal::ZERO {
            return Err(InputError::NegativeIncome(income1).into());
        }
        if income2 < Decimal::ZERO {
            return Err(InputError::NegativeIncome(income2).into());
        }
        if rules.ss_tax_rate < Decimal::ZERO || rules.ss_tax_rate > Decimal::ONE {
            return Err(InputError::RateOutOfRange(rules.ss_tax_rate).into());
        }

        Ok(Self {
            base1: income1.min(rules.ss_wage_cap),
            base2: income2.min(rules.ss_wage_cap),
            rate: rules.ss_tax_rate,
            income: income1 + income2,
        })
    }

    /// The two capped wage bases, per earner.
    pub fn taxed_bases(&self) -> (Decimal, Decimal) {
        (self.base1, self.base2)
    }

    pub fn liability(&self) -> Decimal {
        round_half_up((self.base1 + self.base2) * self.rate)
    }

    pub fn breakdown(&self) -> PolicyBreakdown {
        PolicyBreakdown {
            category: TaxCategory::SocialSecurity,
            total_income: self.income,
            deduction: Decimal::ZERO,
            taxable_income: self.base1 + self.base2,
            liability: self.liability(),
        }
    }
}

/// Medicare tax: a base rate on all income plus an uncapped surtax on income
/// above the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicareTax {
    income: Decimal,
    base_rate: Decimal,
    surtax_rate: Decimal,
    surtax_threshold: Decimal,
}

impl MedicareTax {
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidInput`] for a negative income or a rate
    /// outside [0, 1].
    pub fn new(income: Decimal, rules: &TaxYearRules) -> Result<Self, TaxError> {
        if income < Decimal::ZERO {
            return Err(InputError::NegativeIncome(income).into());
        }
        if rules.medicare_base_rate < Decimal::ZERO || rules.medicare_base_rate > Decimal::ONE {
            return Err(InputError::RateOutOfRange(rules.medicare_base_rate).into());
        }
        if rules.medicare_surtax_rate < Decimal::ZERO || rules.medicare_surtax_rate > Decimal::ONE {
            return Err(InputError::RateOutOfRange(rules.medicare_surtax_rate).into());
        }

        Ok(Self {
            income,
            base_rate: rules.medicare_base_rate,
            surtax_rate: rules.medicare_surtax_rate,
            surtax_threshold: rules.medicare_surtax_threshold,
        })
    }

    pub fn liability(&self) -> Decimal {
        let surtax_base = (self.income - self.surtax_threshold).max(Decimal::ZERO);
        round_half_up(self.income * self.base_rate + surtax_base * self.surtax_rate)
    }

    pub fn breakdown(&self) -> PolicyBreakdown {
        PolicyBreakdown {
            category: TaxCategory::Medicare,
            total_income: self.income,
            deduction: Decimal::ZERO,
            taxable_income: self.income,
            liability: self.liability(),
        }
    }
}
