//! Short narrative readings of the latest year's ratios.

use crate::format;
use analytics::EnrichedYearRecord;

pub fn liquidity_insight(latest: &EnrichedYearRecord, prior: Option<&EnrichedYearRecord>) -> String {
    let current = latest.current_ratio;
    if !current.is_finite() {
        return format!("Liquidity could not be assessed for {}.", latest.year());
    }

    let direction = match prior {
        Some(p) if current > p.current_ratio => {
            format!("Liquidity improved in {}. ", latest.year())
        }
        Some(p) if current < p.current_ratio => {
            format!("Liquidity weakened in {}. ", latest.year())
        }
        _ => String::new(),
    };

    let level = if current >= 1.0 {
        format!(
            "Current Ratio of {} indicates strong ability to cover short-term debts.",
            format::ratio(current, 2)
        )
    } else {
        format!(
            "Current Ratio of {} means current liabilities exceed current assets.",
            format::ratio(current, 2)
        )
    };

    direction + &level
}

pub fn leverage_insight(latest: &EnrichedYearRecord, prior: Option<&EnrichedYearRecord>) -> String {
    let current = latest.debt_to_equity;
    if !current.is_finite() {
        return format!("Leverage could not be assessed for {}.", latest.year());
    }

    match prior {
        Some(p) if p.debt_to_equity.is_finite() && current < p.debt_to_equity => format!(
            "Debt-to-equity fell from {} to {} in {}, reducing financial leverage risk.",
            format::ratio(p.debt_to_equity, 2),
            format::ratio(current, 2),
            latest.year()
        ),
        Some(p) if p.debt_to_equity.is_finite() && current > p.debt_to_equity => format!(
            "Debt-to-equity rose from {} to {} in {}, increasing financial leverage risk.",
            format::ratio(p.debt_to_equity, 2),
            format::ratio(current, 2),
            latest.year()
        ),
        _ => format!(
            "Debt-to-equity stands at {} in {}.",
            format::ratio(current, 2),
            latest.year()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::calculate_metrics;

    #[test]
    fn test_liquidity_insight_for_fixed_dataset() {
        let rows = calculate_metrics(&dataset::financial_data());
        assert_eq!(
            liquidity_insight(&rows[2], Some(&rows[1])),
            "Liquidity improved in 2020. Current Ratio of 1.88 indicates strong ability to cover short-term debts."
        );
        assert_eq!(
            liquidity_insight(&rows[0], None),
            "Current Ratio of 0.83 means current liabilities exceed current assets."
        );
    }

    #[test]
    fn test_leverage_insight_for_fixed_dataset() {
        let rows = calculate_metrics(&dataset::financial_data());
        assert_eq!(
            leverage_insight(&rows[2], Some(&rows[1])),
            "Debt-to-equity fell from 3.96 to 1.28 in 2020, reducing financial leverage risk."
        );
        assert_eq!(
            leverage_insight(&rows[0], None),
            "Debt-to-equity stands at 4.76 in 2018."
        );
    }

    #[test]
    fn test_non_finite_ratios_are_not_interpreted() {
        let mut rows = calculate_metrics(&dataset::financial_data());
        rows[2].current_ratio = f64::NAN;
        rows[2].debt_to_equity = f64::INFINITY;

        assert_eq!(
            liquidity_insight(&rows[2], Some(&rows[1])),
            "Liquidity could not be assessed for 2020."
        );
        assert_eq!(
            leverage_insight(&rows[2], Some(&rows[1])),
            "Leverage could not be assessed for 2020."
        );
    }
}
