use crate::format::{self, FormatOptions, NOT_AVAILABLE};
use analytics::EnrichedYearRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::Serialize;

/// Direction of a KPI's change against the prior year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// A zero change counts as up.
    pub fn from_change(change: f64) -> Self {
        if change < 0.0 { Trend::Down } else { Trend::Up }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

/// One headline card in the dashboard's summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub sub_value: Option<String>,
    pub trend: Trend,
    pub trend_value: Option<String>,
    /// For metrics where going up is bad news.
    pub invert_color: bool,
}

impl KpiCard {
    fn new(title: &str, value: String) -> Self {
        Self {
            title: title.to_string(),
            value,
            sub_value: None,
            trend: Trend::Up,
            trend_value: None,
            invert_color: false,
        }
    }

    fn sub_value(mut self, sub_value: impl Into<String>) -> Self {
        self.sub_value = Some(sub_value.into());
        self
    }

    fn trend(mut self, trend: Trend, trend_value: impl Into<String>) -> Self {
        self.trend = trend;
        self.trend_value = Some(trend_value.into());
        self
    }

    /// Green when the trend is good news, red otherwise.
    pub fn is_favourable(&self) -> bool {
        (self.trend == Trend::Up) != self.invert_color
    }
}

/// Builds the four summary cards for the latest year.
///
/// `prior` is the year compared against; without it the comparison cards carry
/// no trend value.
pub fn build_kpi_cards(
    latest: &EnrichedYearRecord,
    prior: Option<&EnrichedYearRecord>,
    options: &FormatOptions,
) -> Vec<KpiCard> {
    vec![
        revenue_card(latest, prior, options),
        net_income_card(latest, prior, options),
        gross_margin_card(latest, prior, options),
        cash_card(latest, prior, options),
    ]
}

fn revenue_card(
    latest: &EnrichedYearRecord,
    prior: Option<&EnrichedYearRecord>,
    options: &FormatOptions,
) -> KpiCard {
    let card = KpiCard::new(
        "Total Revenue",
        format::billions(to_f64(latest.raw.revenue), options.kpi_decimals),
    )
    .sub_value(format!("FY {}", latest.year()));

    match prior {
        Some(_) => card.trend(
            Trend::from_change(latest.rev_growth),
            format!(
                "{} YoY",
                format::percent(latest.rev_growth, options.kpi_decimals)
            ),
        ),
        None => card,
    }
}

fn net_income_card(
    latest: &EnrichedYearRecord,
    prior: Option<&EnrichedYearRecord>,
    options: &FormatOptions,
) -> KpiCard {
    let current = latest.raw.net_income;
    let card = KpiCard::new("Net Income", format::millions(current)).sub_value("GAAP Net Income");

    let Some(prior) = prior else {
        return card;
    };
    let previous = prior.raw.net_income;
    let trend = Trend::from_change(to_f64(current - previous));

    let trend_value = if previous < Decimal::ZERO && current > Decimal::ZERO {
        "Turned Profitable".to_string()
    } else if previous > Decimal::ZERO && current < Decimal::ZERO {
        "Turned Loss-Making".to_string()
    } else {
        format!(
            "{} YoY",
            format::percent(latest.ni_growth, options.kpi_decimals)
        )
    };

    card.trend(trend, trend_value)
}

fn gross_margin_card(
    latest: &EnrichedYearRecord,
    prior: Option<&EnrichedYearRecord>,
    options: &FormatOptions,
) -> KpiCard {
    let decimals = options.kpi_decimals;
    let card = KpiCard::new(
        "Gross Margin",
        format::percent(latest.gross_margin, decimals),
    );

    let Some(prior) = prior else {
        return card;
    };
    let delta = latest.gross_margin - prior.gross_margin;
    let delta_text = if delta.is_finite() {
        format!("{:+.*}% pts", decimals, delta)
    } else {
        NOT_AVAILABLE.to_string()
    };

    card.sub_value(format!(
        "Vs {} Prev Year",
        format::percent(prior.gross_margin, decimals)
    ))
    .trend(Trend::from_change(delta), delta_text)
}

/// Year-over-year change in cash, a rough stand-in for free cash flow.
fn cash_card(
    latest: &EnrichedYearRecord,
    prior: Option<&EnrichedYearRecord>,
    options: &FormatOptions,
) -> KpiCard {
    let Some(prior) = prior else {
        return KpiCard::new("Free Cash Proxy", NOT_AVAILABLE.to_string())
            .sub_value("Net Change in Cash");
    };

    let change = latest.raw.cash - prior.raw.cash;
    let trend_value = if change >= Decimal::ZERO {
        "Strong Accumulation"
    } else {
        "Cash Drawdown"
    };

    KpiCard::new(
        "Free Cash Proxy",
        format::billions(to_f64(change), options.kpi_decimals),
    )
    .sub_value("Net Change in Cash")
    .trend(Trend::from_change(to_f64(change)), trend_value)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
