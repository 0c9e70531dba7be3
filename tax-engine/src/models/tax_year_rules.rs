use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Bracket;

/// Every rate, bracket table, cap, and deduction for one tax year.
///
/// Rules are data rather than code: supporting a new tax year means adding a
/// constructor with that year's published values, not touching the policy
/// calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearRules {
    pub tax_year: i32,

    pub federal_brackets: Vec<Bracket>,
    pub federal_standard_deduction: Decimal,

    pub pa_income_tax_rate: Decimal,
    pub ny_brackets: Vec<Bracket>,
    pub ny_standard_deduction: Decimal,
    pub ny_child_deduction: Decimal,

    pub pa_local_rate: Decimal,
    pub ny_local_rate: Decimal,

    /// Per-earner cap on wages subject to social security tax.
    pub ss_wage_cap: Decimal,
    pub ss_tax_rate: Decimal,

    pub medicare_base_rate: Decimal,
    pub medicare_surtax_rate: Decimal,
    pub medicare_surtax_threshold: Decimal,
}

impl TaxYearRules {
    /// 2024 rules, married filing jointly.
    pub fn year_2024() -> Self {
        Self {
            tax_year: 2024,
            federal_brackets: vec![
                Bracket::up_to(Decimal::from(23_200), Decimal::new(10, 2)),
                Bracket::up_to(Decimal::from(94_300), Decimal::new(12, 2)),
                Bracket::up_to(Decimal::from(201_050), Decimal::new(22, 2)),
                Bracket::up_to(Decimal::from(383_900), Decimal::new(24, 2)),
                Bracket::up_to(Decimal::from(487_450), Decimal::new(32, 2)),
                Bracket::up_to(Decimal::from(731_200), Decimal::new(35, 2)),
                Bracket::unbounded(Decimal::new(37, 2)),
            ],
            federal_standard_deduction: Decimal::from(29_200),
            pa_income_tax_rate: Decimal::new(307, 4),
            ny_brackets: vec![
                Bracket::up_to(Decimal::from(17_150), Decimal::new(4, 2)),
                Bracket::up_to(Decimal::from(23_600), Decimal::new(45, 3)),
                Bracket::up_to(Decimal::from(27_900), Decimal::new(525, 4)),
                Bracket::up_to(Decimal::from(161_550), Decimal::new(55, 3)),
                Bracket::up_to(Decimal::from(323_200), Decimal::new(6, 2)),
                Bracket::up_to(Decimal::from(2_155_350), Decimal::new(685, 4)),
                Bracket::up_to(Decimal::from(5_000_000), Decimal::new(965, 4)),
                Bracket::up_to(Decimal::from(25_000_000), Decimal::new(103, 3)),
                Bracket::unbounded(Decimal::new(109, 3)),
            ],
            ny_standard_deduction: Decimal::from(16_050),
            ny_child_deduction: Decimal::from(1_000),
            pa_local_rate: Decimal::new(1, 2),
            ny_local_rate: Decimal::new(4, 2),
            ss_wage_cap: Decimal::from(168_600),
            ss_tax_rate: Decimal::new(62, 3),
            medicare_base_rate: Decimal::new(145, 4),
            medicare_surtax_rate: Decimal::new(9, 3),
            medicare_surtax_threshold: Decimal::from(250_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn year_2024_federal_table_has_seven_tiers() {
        let rules = TaxYearRules::year_2024();

        assert_eq!(rules.federal_brackets.len(), 7);
        assert_eq!(rules.federal_brackets[0].rate, dec!(0.10));
        assert_eq!(rules.federal_brackets[6].upper_bound, None);
        assert_eq!(rules.federal_brackets[6].rate, dec!(0.37));
    }

    #[test]
    fn year_2024_ny_table_has_nine_tiers() {
        let rules = TaxYearRules::year_2024();

        assert_eq!(rules.ny_brackets.len(), 9);
        assert_eq!(rules.ny_brackets[0].upper_bound, Some(dec!(17150)));
        assert_eq!(rules.ny_brackets[0].rate, dec!(0.04));
        assert_eq!(rules.ny_brackets[8].upper_bound, None);
        assert_eq!(rules.ny_brackets[8].rate, dec!(0.109));
    }

    #[test]
    fn year_2024_payroll_constants() {
        let rules = TaxYearRules::year_2024();

        assert_eq!(rules.ss_wage_cap, dec!(168600));
        assert_eq!(rules.ss_tax_rate, dec!(0.062));
        assert_eq!(rules.medicare_base_rate, dec!(0.0145));
        assert_eq!(rules.medicare_surtax_rate, dec!(0.009));
        assert_eq!(rules.medicare_surtax_threshold, dec!(250000));
    }

    #[test]
    fn year_2024_flat_rates() {
        let rules = TaxYearRules::year_2024();

        assert_eq!(rules.pa_income_tax_rate, dec!(0.0307));
        assert_eq!(rules.pa_local_rate, dec!(0.01));
        assert_eq!(rules.ny_local_rate, dec!(0.04));
    }
}
