//! # Fixed Dataset
//!
//! The three fiscal years of disclosed figures the dashboard is built from,
//! hardcoded from the company's 10-K filings. Nothing is loaded at runtime:
//! [`financial_data`] builds the same immutable sequence on every call and
//! the caller owns it.

use core_types::RawYearRecord;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Descriptive metadata shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub source: &'static str,
}

/// The company the fixed dataset describes.
pub const COMPANY: CompanyProfile = CompanyProfile {
    name: "Tesla, Inc.",
    source: "SEC 10-K filings (2018-2020)",
};

/// Returns the fiscal years in ascending order, one record per year.
pub fn financial_data() -> Vec<RawYearRecord> {
    vec![
        RawYearRecord {
            year: 2018,
            revenue: dec!(21461),
            cost_of_revenue: dec!(17419),
            gross_profit: dec!(4042),
            operating_expenses: dec!(4430),
            ebit: dec!(-388),
            net_income: dec!(-976),
            interest_expense: dec!(663),
            cash: dec!(3686),
            current_assets: dec!(8307),
            current_liabilities: dec!(9993),
            inventory: dec!(3113),
            total_assets: dec!(29740),
            total_liabilities: dec!(23427),
            equity: dec!(4923),
            accounts_receivable: dec!(949),
        },
        RawYearRecord {
            year: 2019,
            revenue: dec!(24578),
            cost_of_revenue: dec!(20509),
            gross_profit: dec!(4069),
            operating_expenses: dec!(4138),
            ebit: dec!(-69),
            net_income: dec!(-862),
            interest_expense: dec!(685),
            cash: dec!(6268),
            current_assets: dec!(12103),
            current_liabilities: dec!(10667),
            inventory: dec!(3552),
            total_assets: dec!(34309),
            total_liabilities: dec!(26199),
            equity: dec!(6618),
            accounts_receivable: dec!(1324),
        },
        RawYearRecord {
            year: 2020,
            revenue: dec!(31536),
            cost_of_revenue: dec!(24906),
            gross_profit: dec!(6630),
            operating_expenses: dec!(4636),
            ebit: dec!(1994),
            net_income: dec!(721),
            interest_expense: dec!(748),
            cash: dec!(19384),
            current_assets: dec!(26717),
            current_liabilities: dec!(14248),
            inventory: dec!(4101),
            total_assets: dec!(52148),
            total_liabilities: dec!(28418),
            equity: dec!(22225),
            accounts_receivable: dec!(1886),
        },
    ]
}

/// The `(first, last)` fiscal years covered, e.g. for "FY 2018 - 2020".
pub fn fiscal_range(records: &[RawYearRecord]) -> Option<(u16, u16)> {
    Some((records.first()?.year, records.last()?.year))
}
