use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fiscal year of disclosed financial-statement figures.
///
/// All currency figures are in millions of the reporting currency. The
/// record is plain data: nothing here checks that the line items agree with
/// each other, see [`RawYearRecord::check_gross_profit`] for the one
/// identity the statements are expected to satisfy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawYearRecord {
    /// Four-digit fiscal year label, e.g. `2020`.
    pub year: u16,

    // I. Income Statement
    pub revenue: Decimal,
    pub cost_of_revenue: Decimal,
    pub gross_profit: Decimal,
    pub operating_expenses: Decimal,
    /// Earnings before interest and taxes, used as the operating income proxy.
    pub ebit: Decimal,
    /// Net income attributable to common stockholders.
    pub net_income: Decimal,
    pub interest_expense: Decimal,

    // II. Balance Sheet
    pub cash: Decimal,
    pub current_assets: Decimal,
    pub current_liabilities: Decimal,
    pub inventory: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub equity: Decimal,
    pub accounts_receivable: Decimal,
}

impl RawYearRecord {
    /// Returns `true` when `gross_profit == revenue - cost_of_revenue`.
    pub fn is_gross_profit_consistent(&self) -> bool {
        self.gross_profit == self.revenue - self.cost_of_revenue
    }

    /// Same check as [`Self::is_gross_profit_consistent`], but reports the mismatch.
    pub fn check_gross_profit(&self) -> Result<(), CoreError> {
        if self.is_gross_profit_consistent() {
            return Ok(());
        }

        Err(CoreError::InvalidInput(
            format!("gross_profit ({})", self.year),
            format!(
                "expected {} (revenue - cost_of_revenue), found {}",
                self.revenue - self.cost_of_revenue,
                self.gross_profit
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> RawYearRecord {
        RawYearRecord {
            year: 2020,
            revenue: dec!(31536),
            cost_of_revenue: dec!(24906),
            gross_profit: dec!(6630),
            ..Default::default()
        }
    }

    #[test]
    fn test_gross_profit_identity_holds() {
        let record = sample();
        assert!(record.is_gross_profit_consistent());
        assert!(record.check_gross_profit().is_ok());
    }

    #[test]
    fn test_gross_profit_mismatch_is_reported() {
        let record = RawYearRecord {
            gross_profit: dec!(6000),
            ..sample()
        };
        assert!(!record.is_gross_profit_consistent());

        let err = record.check_gross_profit().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gross_profit (2020)"));
        assert!(message.contains("expected 6630"));
    }

    #[test]
    fn test_serializes_with_camel_case_numbers() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["year"], 2020);
        assert_eq!(json["costOfRevenue"], 24906.0);
        assert!(json.get("cost_of_revenue").is_none());
    }
}
