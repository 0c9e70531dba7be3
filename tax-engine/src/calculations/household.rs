//! The household aggregate: composes every policy into one liability picture.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::calculations::policies::{
    FederalTax, LocalTax, MedicareTax, SocialSecurityTax, StateTax, TaxCategory, TaxPolicy,
};
use crate::error::{InputError, TaxError};
use crate::models::{HouseholdProfile, StateCode, TaxYearRules};

/// A two-earner household and the rules year it files under.
///
/// Validated once at construction and immutable afterwards. Every liability
/// accessor builds its policy fresh from the current fields, so repeated
/// calls with the same household return identical results.
///
/// The local levy is computed for Pennsylvania by default regardless of the
/// household's residence state; this is a documented limitation, not an
/// oversight. [`with_local_jurisdiction`](Self::with_local_jurisdiction)
/// switches it to the actual jurisdiction, and a warning is logged whenever
/// the two diverge.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::Household;
/// use tax_engine::models::{HouseholdProfile, StateCode, TaxYearRules, TaxesPaid};
///
/// let profile = HouseholdProfile {
///     income1: dec!(100000),
///     income2: dec!(80000),
///     other_income: dec!(5000),
///     contr401k1: dec!(20000),
///     contr401k2: dec!(15000),
///     state: StateCode::Pa,
///     taxes_paid: TaxesPaid::default(),
/// };
/// let household = Household::new(profile, TaxYearRules::year_2024()).unwrap();
///
/// assert_eq!(household.total_income(), dec!(185000));
/// assert_eq!(household.total_tax().unwrap(), dec!(38054.00));
/// assert_eq!(household.effective_tax_rate().unwrap(), dec!(20.57));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    profile: HouseholdProfile,
    rules: TaxYearRules,
    local_jurisdiction: StateCode,
}

impl Household {
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidInput`] when any income, contribution, or
    /// withheld amount is negative.
    pub fn new(profile: HouseholdProfile, rules: TaxYearRules) -> Result<Self, TaxError> {
        for income in [profile.income1, profile.income2, profile.other_income] {
            if income < Decimal::ZERO {
                return Err(InputError::NegativeIncome(income).into());
            }
        }
        for contribution in [profile.contr401k1, profile.contr401k2] {
            if contribution < Decimal::ZERO {
                return Err(InputError::NegativeDeduction(contribution).into());
            }
        }
        let paid = profile.taxes_paid;
        for withheld in [
            paid.federal,
            paid.state,
            paid.local,
            paid.social_security,
            paid.medicare,
        ] {
            if withheld < Decimal::ZERO {
                return Err(InputError::NegativeWithholding(withheld).into());
            }
        }

        Ok(Self {
            profile,
            rules,
            local_jurisdiction: StateCode::Pa,
        })
    }

    /// Overrides the jurisdiction the local levy is computed for.
    pub fn with_local_jurisdiction(mut self, state: StateCode) -> Self {
        self.local_jurisdiction = state;
        self
    }

    pub fn profile(&self) -> &HouseholdProfile {
        &self.profile
    }

    pub fn rules(&self) -> &TaxYearRules {
        &self.rules
    }

    pub fn state(&self) -> StateCode {
        self.profile.state
    }

    pub fn local_jurisdiction(&self) -> StateCode {
        self.local_jurisdiction
    }

    pub fn total_income(&self) -> Decimal {
        self.profile.income1 + self.profile.income2 + self.profile.other_income
    }

    fn combined_contr401k(&self) -> Decimal {
        self.profile.contr401k1 + self.profile.contr401k2
    }

    /// Builds the policy for one category from the household's current fields.
    pub fn policy(&self, category: TaxCategory) -> Result<TaxPolicy, TaxError> {
        let policy = match category {
            TaxCategory::Federal => TaxPolicy::Federal(FederalTax::new(
                self.total_income(),
                self.combined_contr401k(),
                &self.rules,
            )?),
            TaxCategory::State => TaxPolicy::State(StateTax::new(
                self.total_income(),
                self.combined_contr401k(),
                self.profile.state,
                &self.rules,
            )?),
            TaxCategory::Local => {
                if self.local_jurisdiction != self.profile.state {
                    warn!(
                        residence = self.profile.state.as_str(),
                        local = self.local_jurisdiction.as_str(),
                        "local tax computed for a jurisdiction other than the residence state"
                    );
                }
                TaxPolicy::Local(LocalTax::new(
                    self.total_income(),
                    self.local_jurisdiction,
                    &self.rules,
                )?)
            }
            TaxCategory::SocialSecurity => TaxPolicy::SocialSecurity(SocialSecurityTax::new(
                self.profile.income1,
                self.profile.income2,
                &self.rules,
            )?),
            TaxCategory::Medicare => {
                TaxPolicy::Medicare(MedicareTax::new(self.total_income(), &self.rules)?)
            }
        };
        Ok(policy)
    }

    pub fn liability(&self, category: TaxCategory) -> Result<Decimal, TaxError> {
        Ok(self.policy(category)?.liability())
    }

    pub fn federal_tax(&self) -> Result<Decimal, TaxError> {
        self.liability(TaxCategory::Federal)
    }

    pub fn state_tax(&self) -> Result<Decimal, TaxError> {
        self.liability(TaxCategory::State)
    }

    pub fn local_tax(&self) -> Result<Decimal, TaxError> {
        self.liability(TaxCategory::Local)
    }

    pub fn social_security_tax(&self) -> Result<Decimal, TaxError> {
        self.liability(TaxCategory::SocialSecurity)
    }

    pub fn medicare_tax(&self) -> Result<Decimal, TaxError> {
        self.liability(TaxCategory::Medicare)
    }

    pub fn total_tax(&self) -> Result<Decimal, TaxError> {
        Ok(self.federal_tax()?
            + self.state_tax()?
            + self.local_tax()?
            + self.social_security_tax()?
            + self.medicare_tax()?)
    }

    /// Balance still owed on the combined federal withholding line, which
    /// bundles income tax with both payroll taxes. Negative means a refund
    /// position.
    pub fn federal_tax_owed(&self) -> Result<Decimal, TaxError> {
        let paid = self.profile.taxes_paid;
        Ok((self.federal_tax()? - paid.federal)
            + (self.social_security_tax()? - paid.social_security)
            + (self.medicare_tax()? - paid.medicare))
    }

    pub fn state_tax_owed(&self) -> Result<Decimal, TaxError> {
        Ok(self.state_tax()? - self.profile.taxes_paid.state)
    }

    pub fn local_tax_owed(&self) -> Result<Decimal, TaxError> {
        Ok(self.local_tax()? - self.profile.taxes_paid.local)
    }

    /// Total liability as a percentage of total income, rounded to two
    /// decimal places. Zero for a household with no income.
    pub fn effective_tax_rate(&self) -> Result<Decimal, TaxError> {
        let total_income = self.total_income();
        if total_income.is_zero() {
            return Ok(Decimal::ZERO);
        }
        Ok(round_half_up(
            self.total_tax()? / total_income * Decimal::ONE_HUNDRED,
        ))
    }
}
