use crate::metric::Metric;
use core_types::RawYearRecord;
use serde::Serialize;

/// A fiscal year's raw figures together with the ratios derived from them.
///
/// Built once by the transform and never mutated afterwards. Ratios are plain,
/// unrounded `f64`s and may be non-finite when a denominator was zero; they
/// serialize as `null` in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedYearRecord {
    #[serde(flatten)]
    pub raw: RawYearRecord,

    // I. Growth (%), zero for the first year
    pub rev_growth: f64,
    pub ni_growth: f64,

    // II. Margins (%)
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,

    // III. Liquidity
    pub current_ratio: f64,
    pub quick_ratio: f64,

    // IV. Leverage
    pub debt_to_equity: f64,
    pub interest_coverage: f64,

    // V. Efficiency
    pub inventory_turnover: f64,
    pub asset_turnover: f64,
    /// Days sales outstanding.
    pub dso: f64,
}

impl EnrichedYearRecord {
    pub fn raw(&self) -> &RawYearRecord {
        &self.raw
    }

    pub fn year(&self) -> u16 {
        self.raw.year
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::RevGrowth => self.rev_growth,
            Metric::NiGrowth => self.ni_growth,
            Metric::GrossMargin => self.gross_margin,
            Metric::OperatingMargin => self.operating_margin,
            Metric::NetMargin => self.net_margin,
            Metric::CurrentRatio => self.current_ratio,
            Metric::QuickRatio => self.quick_ratio,
            Metric::DebtToEquity => self.debt_to_equity,
            Metric::InterestCoverage => self.interest_coverage,
            Metric::InventoryTurnover => self.inventory_turnover,
            Metric::AssetTurnover => self.asset_turnover,
            Metric::Dso => self.dso,
        }
    }

    /// All derived values, in `Metric::ALL` order.
    pub fn metrics(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(|m| (m, self.metric(m)))
    }

    /// Metrics that came out as `inf` or `NaN`.
    pub fn non_finite_metrics(&self) -> Vec<Metric> {
        self.metrics()
            .filter(|(_, value)| !value.is_finite())
            .map(|(metric, _)| metric)
            .collect()
    }
}

/// The most recent year of an enriched sequence.
pub fn latest(records: &[EnrichedYearRecord]) -> Option<&EnrichedYearRecord> {
    records.last()
}

/// The year before [`latest`], used for comparison deltas.
pub fn prior(records: &[EnrichedYearRecord]) -> Option<&EnrichedYearRecord> {
    records.len().checked_sub(2).map(|index| &records[index])
}
