use crate::error::DashboardError;
use crate::format::FormatOptions;
use crate::insights;
use crate::kpi::{KpiCard, build_kpi_cards};
use crate::sections::{Section, build_sections};
use analytics::{AnalyticsEngine, EnrichedYearRecord, MetricsMode};
use configuration::Config;
use core_types::RawYearRecord;
use dataset::CompanyProfile;

/// Everything the renderer needs, computed in one pass from the raw records.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub company: CompanyProfile,
    pub first_year: u16,
    pub latest_year: u16,
    pub records: Vec<EnrichedYearRecord>,
    pub kpis: Vec<KpiCard>,
    pub sections: Vec<Section>,
    pub options: FormatOptions,
}

impl DashboardView {
    pub fn build(
        raw: &[RawYearRecord],
        company: CompanyProfile,
        config: &Config,
    ) -> Result<Self, DashboardError> {
        let (first_year, latest_year) =
            dataset::fiscal_range(raw).ok_or(DashboardError::EmptyDataset)?;
        let records = calculate(raw, config)?;
        let options = FormatOptions::from(&config.display);

        let Some(latest) = analytics::latest(&records) else {
            return Err(DashboardError::EmptyDataset);
        };
        let prior = analytics::prior(&records);

        let kpis = build_kpi_cards(latest, prior, &options);

        let mut sections = build_sections();
        for panel in sections.iter_mut().flat_map(|s| s.panels.iter_mut()) {
            panel.insight = match panel.title {
                "Liquidity Ratios" => Some(insights::liquidity_insight(latest, prior)),
                "Capital Structure & Solvency" => Some(insights::leverage_insight(latest, prior)),
                _ => None,
            };
        }

        tracing::info!(
            "Built dashboard for {} covering FY {} - {}",
            company.name,
            first_year,
            latest_year
        );

        Ok(Self {
            company,
            first_year,
            latest_year,
            kpis,
            sections,
            options,
            records,
        })
    }
}

/// Runs the metrics transform in the mode the configuration asks for.
pub fn calculate(
    raw: &[RawYearRecord],
    config: &Config,
) -> Result<Vec<EnrichedYearRecord>, DashboardError> {
    let mode = if config.metrics.strict {
        MetricsMode::Strict
    } else {
        MetricsMode::Lenient
    };
    tracing::debug!("Calculating metrics for {} fiscal years in {:?} mode", raw.len(), mode);

    Ok(AnalyticsEngine::new(mode).calculate(raw)?)
}
