//! Progressive bracket schedules and the marginal tax walk over them.
//!
//! A [`Schedule`] is a validated, ascending table of [`Bracket`]s. Validation
//! happens once at construction; the walk itself is infallible. Income above
//! the highest finite bound is taxed at the last bracket's rate, so a table
//! with no unbounded tier still produces a total for any income.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::Schedule;
//! use tax_engine::models::Bracket;
//!
//! let schedule = Schedule::new(vec![
//!     Bracket::up_to(dec!(50000), dec!(0.10)),
//!     Bracket::unbounded(dec!(0.20)),
//! ])
//! .unwrap();
//!
//! // 50000 × 10% + 50000 × 20%
//! assert_eq!(schedule.tax(dec!(100000)), dec!(15000.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::error::{InputError, TaxError};
use crate::models::Bracket;

/// A validated progressive tax schedule.
///
/// Invariants enforced at construction: at least one bracket, every rate in
/// [0, 1], finite upper bounds non-negative and strictly increasing, and an
/// unbounded bracket only in last position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    brackets: Vec<Bracket>,
}

impl Schedule {
    pub fn new(brackets: Vec<Bracket>) -> Result<Self, TaxError> {
        if brackets.is_empty() {
            return Err(InputError::EmptySchedule.into());
        }

        let mut previous_bound: Option<Decimal> = None;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(InputError::RateOutOfRange(bracket.rate).into());
            }
            match bracket.upper_bound {
                Some(bound) => {
                    if bound < Decimal::ZERO || previous_bound.is_some_and(|p| bound <= p) {
                        return Err(InputError::UnorderedBounds.into());
                    }
                    previous_bound = Some(bound);
                }
                None if index + 1 != brackets.len() => {
                    return Err(InputError::InteriorUnboundedBracket.into());
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Builds a schedule from parallel bound and rate sequences.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TierLengthMismatch`] when the sequences differ in
    /// length, plus everything [`Schedule::new`] rejects.
    pub fn from_tiers(bounds: &[Option<Decimal>], rates: &[Decimal]) -> Result<Self, TaxError> {
        if bounds.len() != rates.len() {
            return Err(InputError::TierLengthMismatch {
                bounds: bounds.len(),
                rates: rates.len(),
            }
            .into());
        }

        let brackets = bounds
            .iter()
            .zip(rates)
            .map(|(&upper_bound, &rate)| Bracket { upper_bound, rate })
            .collect();
        Self::new(brackets)
    }

    /// A single unbounded bracket taxing all income at `rate`.
    pub fn flat(rate: Decimal) -> Result<Self, TaxError> {
        Self::new(vec![Bracket::unbounded(rate)])
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Marginal tax over this schedule for a non-negative taxable income.
    ///
    /// Walks the tiers in ascending order, taxing each filled slice at its
    /// rate. Income left over after the last finite bound is taxed at the
    /// last bracket's rate. The result is rounded half-up to two decimal
    /// places at return.
    pub fn tax(&self, taxable_income: Decimal) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut previous_bound = Decimal::ZERO;
        let mut remaining = taxable_income;

        for bracket in &self.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            let taxed_here = match bracket.upper_bound {
                Some(bound) => remaining.min(bound - previous_bound),
                None => remaining,
            };
            tax += taxed_here * bracket.rate;
            remaining -= taxed_here;
            if let Some(bound) = bracket.upper_bound {
                previous_bound = bound;
            }
        }

        // Excess above an all-finite table falls into the top tier's rate.
        if remaining > Decimal::ZERO {
            if let Some(last) = self.brackets.last() {
                tax += remaining * last.rate;
            }
        }

        round_half_up(tax)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn two_tier() -> Schedule {
        Schedule::new(vec![
            Bracket::up_to(dec!(50000), dec!(0.10)),
            Bracket::unbounded(dec!(0.20)),
        ])
        .unwrap()
    }

    // =========================================================================
    // construction / validation tests
    // =========================================================================

    #[test]
    fn new_rejects_empty_table() {
        let result = Schedule::new(vec![]);

        assert_eq!(result, Err(InputError::EmptySchedule.into()));
    }

    #[test]
    fn new_rejects_rate_above_one() {
        let result = Schedule::new(vec![Bracket::unbounded(dec!(1.5))]);

        assert_eq!(result, Err(InputError::RateOutOfRange(dec!(1.5)).into()));
    }

    #[test]
    fn new_rejects_negative_rate() {
        let result = Schedule::new(vec![Bracket::unbounded(dec!(-0.1))]);

        assert_eq!(result, Err(InputError::RateOutOfRange(dec!(-0.1)).into()));
    }

    #[test]
    fn new_rejects_non_increasing_bounds() {
        let result = Schedule::new(vec![
            Bracket::up_to(dec!(50000), dec!(0.10)),
            Bracket::up_to(dec!(50000), dec!(0.20)),
        ]);

        assert_eq!(result, Err(InputError::UnorderedBounds.into()));
    }

    #[test]
    fn new_rejects_negative_bound() {
        let result = Schedule::new(vec![Bracket::up_to(dec!(-100), dec!(0.10))]);

        assert_eq!(result, Err(InputError::UnorderedBounds.into()));
    }

    #[test]
    fn new_rejects_interior_unbounded_bracket() {
        let result = Schedule::new(vec![
            Bracket::unbounded(dec!(0.10)),
            Bracket::up_to(dec!(50000), dec!(0.20)),
        ]);

        assert_eq!(result, Err(InputError::InteriorUnboundedBracket.into()));
    }

    #[test]
    fn new_accepts_all_finite_table() {
        let result = Schedule::new(vec![
            Bracket::up_to(dec!(50000), dec!(0.10)),
            Bracket::up_to(dec!(100000), dec!(0.20)),
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn from_tiers_rejects_mismatched_lengths() {
        let result = Schedule::from_tiers(&[Some(dec!(10000)), None], &[dec!(0.1)]);

        assert_eq!(
            result,
            Err(InputError::TierLengthMismatch {
                bounds: 2,
                rates: 1
            }
            .into())
        );
    }

    #[test]
    fn from_tiers_rejects_empty_sequences() {
        let result = Schedule::from_tiers(&[], &[]);

        assert_eq!(result, Err(InputError::EmptySchedule.into()));
    }

    #[test]
    fn from_tiers_builds_matching_brackets() {
        let schedule = Schedule::from_tiers(&[Some(dec!(50000)), None], &[dec!(0.1), dec!(0.2)])
            .unwrap();

        assert_eq!(schedule, two_tier());
    }

    // =========================================================================
    // walk tests
    // =========================================================================

    #[test]
    fn tax_is_zero_for_zero_income() {
        assert_eq!(two_tier().tax(dec!(0)), dec!(0));
    }

    #[test]
    fn flat_rate_taxes_all_income() {
        let schedule = Schedule::flat(dec!(0.1)).unwrap();

        assert_eq!(schedule.tax(dec!(50000)), dec!(5000.00));
    }

    #[test]
    fn flat_rate_rounds_half_up_at_return() {
        let schedule = Schedule::flat(dec!(0.1)).unwrap();

        // 100.555 × 0.1 = 10.0555
        assert_eq!(schedule.tax(dec!(100.555)), dec!(10.06));
    }

    #[test]
    fn two_tier_boundary_splits_income_across_tiers() {
        // 50000 × 10% + 50000 × 20%
        assert_eq!(two_tier().tax(dec!(100000)), dec!(15000.00));
    }

    #[test]
    fn income_exactly_at_bound_stays_in_lower_tier() {
        assert_eq!(two_tier().tax(dec!(50000)), dec!(5000.00));
    }

    #[test]
    fn excess_over_all_finite_table_uses_last_rate() {
        let schedule = Schedule::new(vec![
            Bracket::up_to(dec!(50000), dec!(0.10)),
            Bracket::up_to(dec!(100000), dec!(0.20)),
        ])
        .unwrap();

        // 50000 × 10% + 50000 × 20% + 100000 × 20%
        assert_eq!(schedule.tax(dec!(200000)), dec!(35000.00));
    }

    #[test]
    fn tax_is_monotonically_non_decreasing_in_income() {
        let schedule = Schedule::new(crate::models::TaxYearRules::year_2024().federal_brackets)
            .unwrap();

        let incomes = [
            dec!(0),
            dec!(10000),
            dec!(23200),
            dec!(23200.01),
            dec!(94300),
            dec!(250000),
            dec!(731200),
            dec!(1000000),
        ];
        let mut last = dec!(0);
        for income in incomes {
            let tax = schedule.tax(income);
            assert!(tax >= last, "tax({income}) = {tax} dropped below {last}");
            last = tax;
        }
    }

    #[test]
    fn tax_is_pure_across_repeated_calls() {
        let schedule = two_tier();

        assert_eq!(schedule.tax(dec!(76543.21)), schedule.tax(dec!(76543.21)));
    }
}
