//! Jurisdiction-specific liability policies.
//!
//! Each policy validates its inputs once at construction and is immutable
//! afterwards; [`liability`](TaxPolicy::liability) is a pure function of the
//! constructed state. The closed [`TaxPolicy`] enum is the single interface
//! over the set; selection happens by [`TaxCategory`] and
//! [`StateCode`](crate::models::StateCode), not by trait objects.

mod federal;
mod local;
mod payroll;
mod state;

pub use federal::FederalTax;
pub use local::LocalTax;
pub use payroll::{MedicareTax, SocialSecurityTax};
pub use state::StateTax;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::schedule::Schedule;
use crate::error::{InputError, TaxError};

/// The tax categories a household is liable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxCategory {
    Federal,
    State,
    Local,
    SocialSecurity,
    Medicare,
}

impl TaxCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "Federal",
            Self::State => "State",
            Self::Local => "Local",
            Self::SocialSecurity => "Social Security",
            Self::Medicare => "Medicare",
        }
    }
}

/// One policy from the closed set, behind a single liability interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxPolicy {
    Federal(FederalTax),
    State(StateTax),
    Local(LocalTax),
    SocialSecurity(SocialSecurityTax),
    Medicare(MedicareTax),
}

impl TaxPolicy {
    /// The liability computed by the wrapped policy, rounded to two decimal
    /// places and never negative.
    pub fn liability(&self) -> Decimal {
        match self {
            Self::Federal(policy) => policy.liability(),
            Self::State(policy) => policy.liability(),
            Self::Local(policy) => policy.liability(),
            Self::SocialSecurity(policy) => policy.liability(),
            Self::Medicare(policy) => policy.liability(),
        }
    }

    pub fn category(&self) -> TaxCategory {
        match self {
            Self::Federal(_) => TaxCategory::Federal,
            Self::State(_) => TaxCategory::State,
            Self::Local(_) => TaxCategory::Local,
            Self::SocialSecurity(_) => TaxCategory::SocialSecurity,
            Self::Medicare(_) => TaxCategory::Medicare,
        }
    }

    /// Snapshot of the policy's inputs and result for presentation layers.
    pub fn breakdown(&self) -> PolicyBreakdown {
        match self {
            Self::Federal(policy) => policy.breakdown(),
            Self::State(policy) => policy.breakdown(),
            Self::Local(policy) => policy.breakdown(),
            Self::SocialSecurity(policy) => policy.breakdown(),
            Self::Medicare(policy) => policy.breakdown(),
        }
    }
}

/// Per-policy numbers a presentation layer can render without recomputing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyBreakdown {
    pub category: TaxCategory,
    pub total_income: Decimal,
    pub deduction: Decimal,
    pub taxable_income: Decimal,
    pub liability: Decimal,
}

/// The shared deduct-then-walk computation behind the schedule-based policies.
///
/// Validates income and deduction at construction, floors taxable income at
/// zero, and delegates the walk to [`Schedule::tax`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTax {
    income: Decimal,
    deduction: Decimal,
    taxable_income: Decimal,
    schedule: Schedule,
}

impl ScheduleTax {
    pub fn new(income: Decimal, deduction: Decimal, schedule: Schedule) -> Result<Self, TaxError> {
        if income < Decimal::ZERO {
            return Err(InputError::NegativeIncome(income).into());
        }
        if deduction < Decimal::ZERO {
            return Err(InputError::NegativeDeduction(deduction).into());
        }

        let taxable_income = (income - deduction).max(Decimal::ZERO);
        if taxable_income.is_zero() && income > Decimal::ZERO {
            warn!(%income, %deduction, "deduction covers all income; no tax due");
        }

        Ok(Self {
            income,
            deduction,
            taxable_income,
            schedule,
        })
    }

    pub fn income(&self) -> Decimal {
        self.income
    }

    pub fn deduction(&self) -> Decimal {
        self.deduction
    }

    pub fn taxable_income(&self) -> Decimal {
        self.taxable_income
    }

    pub fn liability(&self) -> Decimal {
        self.schedule.tax(self.taxable_income)
    }

    pub(crate) fn breakdown(&self, category: TaxCategory) -> PolicyBreakdown {
        PolicyBreakdown {
            category,
            total_income: self.income,
            deduction: self.deduction,
            taxable_income: self.taxable_income,
            liability: self.liability(),
        }
    }
}
