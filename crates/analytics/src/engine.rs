use crate::error::AnalyticsError;
use crate::metric::Metric;
use crate::record::EnrichedYearRecord;
use core_types::RawYearRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

const DAYS_PER_YEAR: f64 = 365.0;

/// How the engine treats a zero denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetricsMode {
    /// Let the ratio come out as `inf` or `NaN`.
    #[default]
    Lenient,
    /// Refuse the input with an `AnalyticsError`.
    Strict,
}

/// A stateless calculator for deriving per-year financial ratios.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {
    mode: MetricsMode,
}

impl AnalyticsEngine {
    pub fn new(mode: MetricsMode) -> Self {
        Self { mode }
    }

    /// The main entry point for calculating the enriched sequence.
    ///
    /// # Arguments
    ///
    /// * `records` - Fiscal years in ascending order. The year before element `i`
    ///   is taken to be element `i - 1`, whatever its label says.
    ///
    /// # Returns
    ///
    /// A `Result` containing one `EnrichedYearRecord` per input record, in input
    /// order. In lenient mode this is always `Ok`.
    pub fn calculate(
        &self,
        records: &[RawYearRecord],
    ) -> Result<Vec<EnrichedYearRecord>, AnalyticsError> {
        if self.mode == MetricsMode::Strict {
            self.validate(records)?;
        }

        let enriched = calculate_metrics(records);

        for record in &enriched {
            let non_finite = record.non_finite_metrics();
            if !non_finite.is_empty() {
                tracing::warn!(
                    "Fiscal year {} has non-finite metrics: {:?}",
                    record.year(),
                    non_finite
                );
            }
        }

        Ok(enriched)
    }

    /// Checks ordering and every denominator the transform divides by.
    fn validate(&self, records: &[RawYearRecord]) -> Result<(), AnalyticsError> {
        if records.is_empty() {
            return Err(AnalyticsError::NotEnoughData(
                "at least one fiscal year is required".to_string(),
            ));
        }

        if let Some(pair) = records.windows(2).find(|w| w[0].year >= w[1].year) {
            return Err(AnalyticsError::InvalidInput(format!(
                "fiscal years must be strictly ascending, found {} followed by {}",
                pair[0].year, pair[1].year
            )));
        }

        for (current, previous) in with_predecessors(records) {
            check_denominators(current, previous)?;
        }

        Ok(())
    }
}

/// Derives the enriched sequence without any validation.
///
/// Output has the same length and order as `records`. Growth for the first
/// element is zero, and its turnover ratios use the current-period inventory and
/// assets in place of a two-year average. Zero denominators propagate as
/// non-finite values; only interest coverage is guarded (zero when there is no
/// positive interest expense).
pub fn calculate_metrics(records: &[RawYearRecord]) -> Vec<EnrichedYearRecord> {
    with_predecessors(records)
        .map(|(current, previous)| enrich(current, previous))
        .collect()
}

/// Pairs each record with the one positionally before it.
fn with_predecessors(
    records: &[RawYearRecord],
) -> impl Iterator<Item = (&RawYearRecord, Option<&RawYearRecord>)> {
    let previous = std::iter::once(None).chain(records.iter().map(Some));
    records.iter().zip(previous)
}

fn enrich(item: &RawYearRecord, prev: Option<&RawYearRecord>) -> EnrichedYearRecord {
    let revenue = f(item.revenue);
    let net_income = f(item.net_income);

    // --- Growth ---
    let (rev_growth, ni_growth) = match prev {
        Some(p) => {
            let prev_revenue = f(p.revenue);
            let prev_net_income = f(p.net_income);
            (
                (revenue - prev_revenue) / prev_revenue * 100.0,
                (net_income - prev_net_income) / prev_net_income.abs() * 100.0,
            )
        }
        None => (0.0, 0.0),
    };

    // --- Margins ---
    let gross_margin = f(item.gross_profit) / revenue * 100.0;
    let operating_margin = f(item.ebit) / revenue * 100.0;
    let net_margin = net_income / revenue * 100.0;

    // --- Liquidity ---
    let current_ratio = f(item.current_assets) / f(item.current_liabilities);
    let quick_ratio = (f(item.current_assets) - f(item.inventory)) / f(item.current_liabilities);

    // --- Leverage ---
    let debt_to_equity = f(item.total_liabilities) / f(item.equity);
    let interest_coverage = if item.interest_expense > Decimal::ZERO {
        f(item.ebit) / f(item.interest_expense)
    } else {
        0.0
    };

    // --- Efficiency ---
    // Simple two-year averages where a previous year exists, else the current value.
    let avg_inventory = average_with(item.inventory, prev.map(|p| p.inventory));
    let avg_assets = average_with(item.total_assets, prev.map(|p| p.total_assets));

    let inventory_turnover = f(item.cost_of_revenue) / avg_inventory;
    let asset_turnover = revenue / avg_assets;
    let dso = f(item.accounts_receivable) / revenue * DAYS_PER_YEAR;

    tracing::debug!(
        "Fiscal year {}: revenue growth {:.3}%, gross margin {:.3}%, current ratio {:.4}",
        item.year,
        rev_growth,
        gross_margin,
        current_ratio
    );

    EnrichedYearRecord {
        raw: item.clone(),
        rev_growth,
        ni_growth,
        gross_margin,
        operating_margin,
        net_margin,
        current_ratio,
        quick_ratio,
        debt_to_equity,
        interest_coverage,
        inventory_turnover,
        asset_turnover,
        dso,
    }
}

fn average_with(current: Decimal, previous: Option<Decimal>) -> f64 {
    match previous {
        Some(previous) => (f(current) + f(previous)) / 2.0,
        None => f(current),
    }
}

/// Statement figures are converted once, at the point of division. Ratios are
/// allowed to be non-finite, which `Decimal` cannot represent.
fn f(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Returns the first metric, in calculation order, whose denominator is zero.
fn check_denominators(
    item: &RawYearRecord,
    prev: Option<&RawYearRecord>,
) -> Result<(), AnalyticsError> {
    let zero_in = |metric: Metric| AnalyticsError::DivisionByZero {
        metric,
        year: item.year,
    };

    if let Some(p) = prev {
        if p.revenue.is_zero() {
            return Err(zero_in(Metric::RevGrowth));
        }
        if p.net_income.is_zero() {
            return Err(zero_in(Metric::NiGrowth));
        }
    }

    if item.revenue.is_zero() {
        return Err(zero_in(Metric::GrossMargin));
    }
    if item.current_liabilities.is_zero() {
        return Err(zero_in(Metric::CurrentRatio));
    }
    if item.equity.is_zero() {
        return Err(zero_in(Metric::DebtToEquity));
    }

    let inventory_sum = item.inventory + prev.map_or(Decimal::ZERO, |p| p.inventory);
    if inventory_sum.is_zero() {
        return Err(zero_in(Metric::InventoryTurnover));
    }
    let assets_sum = item.total_assets + prev.map_or(Decimal::ZERO, |p| p.total_assets);
    if assets_sum.is_zero() {
        return Err(zero_in(Metric::AssetTurnover));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn year(year: u16) -> RawYearRecord {
        RawYearRecord {
            year,
            revenue: dec!(1000),
            cost_of_revenue: dec!(600),
            gross_profit: dec!(400),
            operating_expenses: dec!(250),
            ebit: dec!(150),
            net_income: dec!(100),
            interest_expense: dec!(50),
            cash: dec!(200),
            current_assets: dec!(500),
            current_liabilities: dec!(250),
            inventory: dec!(100),
            total_assets: dec!(2000),
            total_liabilities: dec!(1200),
            equity: dec!(800),
            accounts_receivable: dec!(73),
        }
    }

    #[test]
    fn test_pairs_each_record_with_its_predecessor() {
        let records = vec![year(2018), year(2019), year(2020)];
        let pairs: Vec<_> = with_predecessors(&records)
            .map(|(c, p)| (c.year, p.map(|p| p.year)))
            .collect();
        assert_eq!(
            pairs,
            vec![(2018, None), (2019, Some(2018)), (2020, Some(2019))]
        );
    }

    #[test]
    fn test_single_record_uses_current_period_denominators() {
        let enriched = calculate_metrics(&[year(2020)]);
        assert_eq!(enriched.len(), 1);

        let r = &enriched[0];
        assert_eq!(r.rev_growth, 0.0);
        assert_eq!(r.ni_growth, 0.0);
        assert_eq!(r.inventory_turnover, 600.0 / 100.0);
        assert_eq!(r.asset_turnover, 1000.0 / 2000.0);
        assert_eq!(r.dso, 73.0 / 1000.0 * 365.0);
    }

    #[test]
    fn test_predecessor_averages() {
        let second = RawYearRecord {
            inventory: dec!(300),
            total_assets: dec!(3000),
            revenue: dec!(1250),
            ..year(2021)
        };
        let enriched = calculate_metrics(&[year(2020), second]);

        let r = &enriched[1];
        assert_eq!(r.rev_growth, 25.0);
        assert_eq!(r.inventory_turnover, 600.0 / 200.0);
        assert_eq!(r.asset_turnover, 1250.0 / 2500.0);
    }

    #[test]
    fn test_ni_growth_divides_by_absolute_prior_income() {
        let loss = RawYearRecord {
            net_income: dec!(-200),
            ..year(2019)
        };
        let smaller_loss = RawYearRecord {
            net_income: dec!(-100),
            ..year(2020)
        };
        let enriched = calculate_metrics(&[loss, smaller_loss]);
        assert_eq!(enriched[1].ni_growth, 50.0);
    }

    #[test]
    fn test_interest_coverage_is_zero_without_interest_expense() {
        let no_debt = RawYearRecord {
            interest_expense: Decimal::ZERO,
            ..year(2020)
        };
        let enriched = calculate_metrics(&[no_debt]);
        assert_eq!(enriched[0].interest_coverage, 0.0);
    }

    #[test]
    fn test_zero_equity_is_non_finite_not_a_panic() {
        let wiped_out = RawYearRecord {
            equity: Decimal::ZERO,
            ..year(2020)
        };
        let enriched = calculate_metrics(&[wiped_out.clone()]);
        assert_eq!(enriched[0].debt_to_equity, f64::INFINITY);
        assert_eq!(enriched[0].non_finite_metrics(), vec![Metric::DebtToEquity]);

        let negative = RawYearRecord {
            total_liabilities: dec!(-5),
            ..wiped_out.clone()
        };
        assert_eq!(calculate_metrics(&[negative])[0].debt_to_equity, f64::NEG_INFINITY);

        let empty = RawYearRecord {
            total_liabilities: Decimal::ZERO,
            ..wiped_out
        };
        assert!(calculate_metrics(&[empty])[0].debt_to_equity.is_nan());
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(calculate_metrics(&[]).is_empty());
        let lenient = AnalyticsEngine::default();
        assert_eq!(lenient.calculate(&[]), Ok(vec![]));
    }

    #[test]
    fn test_lenient_engine_matches_pure_transform() {
        let records = vec![year(2019), year(2020)];
        let engine = AnalyticsEngine::new(MetricsMode::Lenient);
        assert_eq!(engine.calculate(&records).unwrap(), calculate_metrics(&records));
    }

    #[test]
    fn test_lenient_engine_keeps_non_finite_values() {
        let broken = RawYearRecord {
            revenue: Decimal::ZERO,
            ..year(2020)
        };
        let enriched = AnalyticsEngine::default().calculate(&[broken]).unwrap();
        assert!(!enriched[0].gross_margin.is_finite());
        assert!(!enriched[0].dso.is_finite());
    }

    #[test]
    fn test_strict_rejects_empty_input() {
        let strict = AnalyticsEngine::new(MetricsMode::Strict);
        assert!(matches!(
            strict.calculate(&[]),
            Err(AnalyticsError::NotEnoughData(_))
        ));
    }

    #[test]
    fn test_strict_rejects_unordered_years() {
        let strict = AnalyticsEngine::new(MetricsMode::Strict);
        let result = strict.calculate(&[year(2020), year(2019)]);
        assert!(matches!(result, Err(AnalyticsError::InvalidInput(_))));

        let duplicated = strict.calculate(&[year(2020), year(2020)]);
        assert!(matches!(duplicated, Err(AnalyticsError::InvalidInput(_))));
    }

    #[test]
    fn test_strict_reports_zero_equity() {
        let strict = AnalyticsEngine::new(MetricsMode::Strict);
        let wiped_out = RawYearRecord {
            equity: Decimal::ZERO,
            ..year(2020)
        };
        assert_eq!(
            strict.calculate(&[year(2019), wiped_out]),
            Err(AnalyticsError::DivisionByZero {
                metric: Metric::DebtToEquity,
                year: 2020
            })
        );
    }

    #[test]
    fn test_strict_reports_zero_prior_net_income() {
        let strict = AnalyticsEngine::new(MetricsMode::Strict);
        let break_even = RawYearRecord {
            net_income: Decimal::ZERO,
            ..year(2019)
        };
        let err = strict.calculate(&[break_even, year(2020)]).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::DivisionByZero {
                metric: Metric::NiGrowth,
                year: 2020
            }
        );
        assert!(err.to_string().contains("niGrowth"));
    }

    #[test]
    fn test_strict_reports_zero_average_inventory() {
        let strict = AnalyticsEngine::new(MetricsMode::Strict);
        let no_stock = RawYearRecord {
            inventory: Decimal::ZERO,
            ..year(2020)
        };
        assert_eq!(
            strict.calculate(&[no_stock]),
            Err(AnalyticsError::DivisionByZero {
                metric: Metric::InventoryTurnover,
                year: 2020
            })
        );
    }

    #[test]
    fn test_strict_allows_zero_interest_expense() {
        let strict = AnalyticsEngine::new(MetricsMode::Strict);
        let no_debt = RawYearRecord {
            interest_expense: Decimal::ZERO,
            ..year(2020)
        };
        assert!(strict.calculate(&[no_debt]).is_ok());
    }
}
