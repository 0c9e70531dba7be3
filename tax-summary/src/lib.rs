//! Human-readable liability summaries.
//!
//! This crate is a thin presentation collaborator over `tax-engine`: it
//! snapshots a [`Household`]'s report numbers into serializable structs and
//! renders them via [`std::fmt::Display`]. No tax arithmetic happens here.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_engine::calculations::{Household, PolicyBreakdown};
use tax_engine::error::TaxError;

/// Snapshot of everything the household summary report prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiabilitySummary {
    pub total_income: Decimal,
    pub state: String,
    pub local_jurisdiction: String,
    pub federal_tax_owed: Decimal,
    pub state_tax: Decimal,
    pub state_tax_paid: Decimal,
    pub state_tax_owed: Decimal,
    pub local_tax: Decimal,
    pub local_tax_paid: Decimal,
    pub local_tax_owed: Decimal,
    pub total_tax: Decimal,
    pub effective_tax_rate: Decimal,
}

impl LiabilitySummary {
    /// Captures a household's current report numbers.
    ///
    /// # Errors
    ///
    /// Propagates any [`TaxError`] from the underlying policy construction.
    pub fn for_household(household: &Household) -> Result<Self, TaxError> {
        let paid = household.profile().taxes_paid;
        Ok(Self {
            total_income: household.total_income(),
            state: household.state().as_str().to_owned(),
            local_jurisdiction: household.local_jurisdiction().as_str().to_owned(),
            federal_tax_owed: household.federal_tax_owed()?,
            state_tax: household.state_tax()?,
            state_tax_paid: paid.state,
            state_tax_owed: household.state_tax_owed()?,
            local_tax: household.local_tax()?,
            local_tax_paid: paid.local,
            local_tax_owed: household.local_tax_owed()?,
            total_tax: household.total_tax()?,
            effective_tax_rate: household.effective_tax_rate()?,
        })
    }
}

impl fmt::Display for LiabilitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Income: {:.2}", self.total_income)?;
        writeln!(
            f,
            "Federal Tax owed (incl. Medicare & SS): {:.2}",
            self.federal_tax_owed
        )?;
        writeln!(
            f,
            "{} State Tax owed: {:.2} - {:.2} = {:.2}",
            self.state, self.state_tax, self.state_tax_paid, self.state_tax_owed
        )?;
        writeln!(
            f,
            "{} Local Tax owed: {:.2} - {:.2} = {:.2}",
            self.local_jurisdiction, self.local_tax, self.local_tax_paid, self.local_tax_owed
        )?;
        writeln!(f, "Total Tax Liability: {:.2}", self.total_tax)?;
        write!(f, "Effective Tax Rate: {:.2}%", self.effective_tax_rate)
    }
}

/// Renders one policy's breakdown the way the per-policy report prints it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReport(pub PolicyBreakdown);

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breakdown = &self.0;
        writeln!(f, "Tax type: {}", breakdown.category.as_str())?;
        writeln!(f, "Total Income: {:.2}", breakdown.total_income)?;
        writeln!(f, "Deductions: {:.2}", breakdown.deduction)?;
        writeln!(f, "Taxable Income: {:.2}", breakdown.taxable_income)?;
        write!(f, "Tax Liability: {:.2}", breakdown.liability)
    }
}
