use crate::format::{self, FormatOptions};
use analytics::EnrichedYearRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// One plotted quantity, read straight off the enriched rows.
#[derive(Debug, Clone, Copy)]
pub struct Series {
    pub name: &'static str,
    pub value: fn(&EnrichedYearRecord) -> f64,
}

/// A horizontal marker such as a target ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: &'static str,
}

/// The table counterpart of one dashboard chart: a row per fiscal year and a
/// column per series.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: &'static str,
    pub unit: &'static str,
    pub prefix: &'static str,
    pub series: Vec<Series>,
    pub reference: Option<ReferenceLine>,
    pub insight: Option<String>,
}

impl Panel {
    fn new(title: &'static str, unit: &'static str, prefix: &'static str) -> Self {
        Self {
            title,
            unit,
            prefix,
            series: Vec::new(),
            reference: None,
            insight: None,
        }
    }

    fn series(mut self, name: &'static str, value: fn(&EnrichedYearRecord) -> f64) -> Self {
        self.series.push(Series { name, value });
        self
    }

    fn reference(mut self, value: f64, label: &'static str) -> Self {
        self.reference = Some(ReferenceLine { value, label });
        self
    }

    /// Formatted cells, one row per record: the year, then each series.
    pub fn rows(&self, records: &[EnrichedYearRecord], options: &FormatOptions) -> Vec<Vec<String>> {
        records
            .iter()
            .map(|record| {
                let mut row = vec![record.year().to_string()];
                row.extend(self.series.iter().map(|s| {
                    format::format_value((s.value)(record), self.unit, self.prefix, options)
                }));
                row
            })
            .collect()
    }

    /// Whether a value falls short of the reference line, if there is one.
    pub fn below_reference(&self, value: f64) -> bool {
        self.reference.is_some_and(|r| value < r.value)
    }
}

/// A titled group of panels.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub panels: Vec<Panel>,
}

/// The dashboard body, in display order.
pub fn build_sections() -> Vec<Section> {
    vec![
        Section {
            title: "Profitability & Growth Analysis",
            subtitle: "Revenue trajectory and margin expansion trends.",
            panels: vec![
                Panel::new("Revenue vs. Costs & Income", "M", "$")
                    .series("Total Revenue", |r| to_f64(r.raw.revenue))
                    .series("Gross Profit", |r| to_f64(r.raw.gross_profit))
                    .series("Net Income", |r| to_f64(r.raw.net_income)),
                Panel::new("Margin Evolution", "%", "")
                    .series("Gross Margin", |r| r.gross_margin)
                    .series("Operating Margin", |r| r.operating_margin)
                    .series("Net Margin", |r| r.net_margin),
            ],
        },
        Section {
            title: "Liquidity & Financial Health",
            subtitle: "Assessing ability to meet short and long-term obligations.",
            panels: vec![
                Panel::new("Liquidity Ratios", "", "")
                    .series("Current Ratio", |r| r.current_ratio)
                    .series("Quick Ratio", |r| r.quick_ratio)
                    .reference(1.0, "Target > 1.0"),
                Panel::new("Capital Structure & Solvency", "M", "$")
                    .series("Total Liabilities", |r| to_f64(r.raw.total_liabilities))
                    .series("Total Equity", |r| to_f64(r.raw.equity)),
            ],
        },
    ]
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
