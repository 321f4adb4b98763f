use crate::error::DashboardError;
use crate::format::{self, FormatOptions};
use crate::kpi::KpiCard;
use crate::sections::Panel;
use crate::view::DashboardView;
use analytics::{EnrichedYearRecord, Metric, MetricUnit};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use std::fmt;

const TITLE: &str = "Financial Statement Analysis";

/// Renders the full dashboard: header, KPI cards, then every section.
pub fn render_dashboard(view: &DashboardView) -> String {
    view.to_string()
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(
            f,
            "{} | FY {} - {}",
            self.company.name, self.first_year, self.latest_year
        )?;
        writeln!(f, "Source: {}", self.company.source)?;
        writeln!(f)?;
        writeln!(f, "{}", kpi_table(&self.kpis))?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            writeln!(f, "{}", section.subtitle)?;

            for panel in &section.panels {
                writeln!(f)?;
                writeln!(f, "{}", panel.title.to_uppercase())?;
                writeln!(f, "{}", panel_table(panel, &self.records, &self.options))?;
                if let Some(reference) = &panel.reference {
                    writeln!(f, "Reference: {}", reference.label)?;
                }
                if let Some(insight) = &panel.insight {
                    writeln!(f, "Insight: {insight}")?;
                }
            }
        }
        Ok(())
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn kpi_table(cards: &[KpiCard]) -> Table {
    let mut table = new_table();
    table.set_header(
        cards
            .iter()
            .map(|c| Cell::new(c.title.to_uppercase()).add_attribute(Attribute::Bold)),
    );
    table.add_row(
        cards
            .iter()
            .map(|c| Cell::new(&c.value).add_attribute(Attribute::Bold)),
    );
    table.add_row(cards.iter().map(|c| Cell::new(c.sub_value.as_deref().unwrap_or(""))));
    table.add_row(cards.iter().map(|c| match &c.trend_value {
        Some(text) => {
            let color = if c.is_favourable() { Color::Green } else { Color::Red };
            Cell::new(format!("{} {}", c.trend.arrow(), text)).fg(color)
        }
        None => Cell::new(""),
    }));
    table
}

fn panel_table(panel: &Panel, records: &[EnrichedYearRecord], options: &FormatOptions) -> Table {
    let mut table = new_table();

    let mut header = vec![Cell::new("Year").add_attribute(Attribute::Bold)];
    header.extend(
        panel
            .series
            .iter()
            .map(|s| Cell::new(s.name).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for (record, cells) in records.iter().zip(panel.rows(records, options)) {
        let mut row = Vec::with_capacity(cells.len());
        for (i, text) in cells.into_iter().enumerate() {
            let mut cell = Cell::new(text);
            if i > 0 {
                cell = cell.set_alignment(CellAlignment::Right);
                if panel.below_reference((panel.series[i - 1].value)(record)) {
                    cell = cell.fg(Color::Red);
                }
            }
            row.push(cell);
        }
        table.add_row(row);
    }
    table
}

/// Every derived metric, one row per metric and one column per fiscal year.
pub fn render_metrics_table(records: &[EnrichedYearRecord], options: &FormatOptions) -> String {
    let mut table = new_table();

    let mut header = vec![Cell::new("Metric").add_attribute(Attribute::Bold)];
    header.extend(
        records
            .iter()
            .map(|r| Cell::new(r.year()).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for metric in Metric::ALL {
        let mut row = vec![Cell::new(metric.label())];
        row.extend(records.iter().map(|r| {
            Cell::new(format_metric(metric, r.metric(metric), options.max_decimals))
                .set_alignment(CellAlignment::Right)
        }));
        table.add_row(row);
    }

    table.to_string()
}

/// The enriched rows as pretty-printed JSON; non-finite ratios become `null`.
pub fn render_metrics_json(records: &[EnrichedYearRecord]) -> Result<String, DashboardError> {
    Ok(serde_json::to_string_pretty(records)?)
}

fn format_metric(metric: Metric, value: f64, decimals: usize) -> String {
    match metric.unit() {
        MetricUnit::Percent => format::percent(value, decimals),
        MetricUnit::Multiple => format::ratio(value, decimals),
        MetricUnit::Days => format::days(value, decimals),
    }
}
