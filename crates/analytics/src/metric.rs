use serde::{Deserialize, Serialize};
use std::fmt;

/// How a derived metric is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    /// A percentage, already multiplied by 100.
    Percent,
    /// A plain ratio or "times" multiple.
    Multiple,
    /// A number of days.
    Days,
}

/// Every derived field of an `EnrichedYearRecord`, in calculation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    // Growth
    RevGrowth,
    NiGrowth,
    // Margins
    GrossMargin,
    OperatingMargin,
    NetMargin,
    // Liquidity
    CurrentRatio,
    QuickRatio,
    // Leverage
    DebtToEquity,
    InterestCoverage,
    // Efficiency
    InventoryTurnover,
    AssetTurnover,
    Dso,
}

impl Metric {
    pub const ALL: [Metric; 12] = [
        Metric::RevGrowth,
        Metric::NiGrowth,
        Metric::GrossMargin,
        Metric::OperatingMargin,
        Metric::NetMargin,
        Metric::CurrentRatio,
        Metric::QuickRatio,
        Metric::DebtToEquity,
        Metric::InterestCoverage,
        Metric::InventoryTurnover,
        Metric::AssetTurnover,
        Metric::Dso,
    ];

    /// The camelCase field name used in serialized rows.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::RevGrowth => "revGrowth",
            Metric::NiGrowth => "niGrowth",
            Metric::GrossMargin => "grossMargin",
            Metric::OperatingMargin => "operatingMargin",
            Metric::NetMargin => "netMargin",
            Metric::CurrentRatio => "currentRatio",
            Metric::QuickRatio => "quickRatio",
            Metric::DebtToEquity => "debtToEquity",
            Metric::InterestCoverage => "interestCoverage",
            Metric::InventoryTurnover => "inventoryTurnover",
            Metric::AssetTurnover => "assetTurnover",
            Metric::Dso => "dso",
        }
    }

    /// A human-readable name for tables and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::RevGrowth => "Revenue Growth",
            Metric::NiGrowth => "Net Income Growth",
            Metric::GrossMargin => "Gross Margin",
            Metric::OperatingMargin => "Operating Margin",
            Metric::NetMargin => "Net Margin",
            Metric::CurrentRatio => "Current Ratio",
            Metric::QuickRatio => "Quick Ratio",
            Metric::DebtToEquity => "Debt-to-Equity",
            Metric::InterestCoverage => "Interest Coverage",
            Metric::InventoryTurnover => "Inventory Turnover",
            Metric::AssetTurnover => "Asset Turnover",
            Metric::Dso => "Days Sales Outstanding",
        }
    }

    pub fn unit(&self) -> MetricUnit {
        match self {
            Metric::RevGrowth
            | Metric::NiGrowth
            | Metric::GrossMargin
            | Metric::OperatingMargin
            | Metric::NetMargin => MetricUnit::Percent,
            Metric::Dso => MetricUnit::Days,
            _ => MetricUnit::Multiple,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
