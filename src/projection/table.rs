//! Projection output structures

use serde::{Deserialize, Serialize};

/// One projected year for one business line.
///
/// Values are kept at full double precision; the rounded accessors are for
/// display surfaces. Totals are always formed from the raw values first so
/// per-row rounding error never compounds into the aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Business line this row belongs to
    pub business_name: String,

    /// Plan year, 1-indexed
    pub year: u32,

    /// Projected annual revenue
    pub revenue: f64,

    /// Projected annual cost
    pub cost: f64,

    /// Projected annual profit (revenue - cost)
    pub profit: f64,
}

impl ProjectionRow {
    /// Revenue rounded to the nearest whole unit for display
    pub fn rounded_revenue(&self) -> i64 {
        self.revenue.round() as i64
    }

    /// Cost rounded to the nearest whole unit for display
    pub fn rounded_cost(&self) -> i64 {
        self.cost.round() as i64
    }

    /// Profit rounded to the nearest whole unit for display
    pub fn rounded_profit(&self) -> i64 {
        self.profit.round() as i64
    }
}

/// Year-level totals across all business lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearAggregate {
    /// Plan year, 1-indexed
    pub year: u32,

    /// Sum of raw per-line profit for the year
    pub total_profit: f64,

    /// Return on assets in percent, rounded to 2 decimal places.
    /// Absent when no positive asset base was supplied.
    pub return_on_assets: Option<f64>,
}

impl YearAggregate {
    /// Build an aggregate from the raw profit total and an optional asset base
    pub fn new(year: u32, total_profit: f64, total_assets: Option<f64>) -> Self {
        let return_on_assets =
            total_assets.map(|assets| round_2dp(total_profit / assets * 100.0));
        Self {
            year,
            total_profit,
            return_on_assets,
        }
    }

    /// Total profit rounded to the nearest whole unit for display
    pub fn rounded_total_profit(&self) -> i64 {
        self.total_profit.round() as i64
    }
}

/// Round to two decimal places, half away from zero
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Complete projection result for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Per-line, per-year rows in stable order: line order, then year ascending
    pub rows: Vec<ProjectionRow>,

    /// Year-level totals, year ascending
    pub aggregates: Vec<YearAggregate>,
}

impl ProjectionResult {
    /// Get summary statistics
    pub fn summary(&self) -> PlanSummary {
        let line_count = self
            .rows
            .iter()
            .map(|r| r.business_name.as_str())
            .collect::<std::collections::BTreeSet<_>>()
            .len();

        let cumulative_profit: f64 = self.aggregates.iter().map(|a| a.total_profit).sum();
        let final_year = self.aggregates.last();

        PlanSummary {
            horizon_years: self.aggregates.len() as u32,
            line_count,
            row_count: self.rows.len(),
            cumulative_profit,
            final_year_profit: final_year.map(|a| a.total_profit).unwrap_or(0.0),
            final_year_roa: final_year.and_then(|a| a.return_on_assets),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub horizon_years: u32,
    pub line_count: usize,
    pub row_count: usize,
    pub cumulative_profit: f64,
    pub final_year_profit: f64,
    pub final_year_roa: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_accessors() {
        let row = ProjectionRow {
            business_name: "Retail".to_string(),
            year: 3,
            revenue: 121.0,
            cost: 72.6,
            profit: 48.4,
        };
        assert_eq!(row.rounded_revenue(), 121);
        assert_eq!(row.rounded_cost(), 73);
        assert_eq!(row.rounded_profit(), 48);
    }

    #[test]
    fn test_aggregate_roa_rounding() {
        let agg = YearAggregate::new(3, 48.4, Some(1000.0));
        assert_eq!(agg.return_on_assets, Some(4.84));
        assert_eq!(agg.rounded_total_profit(), 48);

        let no_assets = YearAggregate::new(3, 48.4, None);
        assert_eq!(no_assets.return_on_assets, None);
    }

    #[test]
    fn test_summary() {
        let result = ProjectionResult {
            rows: vec![
                ProjectionRow {
                    business_name: "A".to_string(),
                    year: 1,
                    revenue: 100.0,
                    cost: 60.0,
                    profit: 40.0,
                },
                ProjectionRow {
                    business_name: "B".to_string(),
                    year: 1,
                    revenue: 50.0,
                    cost: 30.0,
                    profit: 20.0,
                },
            ],
            aggregates: vec![YearAggregate::new(1, 60.0, Some(1200.0))],
        };

        let summary = result.summary();
        assert_eq!(summary.horizon_years, 1);
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.row_count, 2);
        assert_eq!(summary.cumulative_profit, 60.0);
        assert_eq!(summary.final_year_profit, 60.0);
        assert_eq!(summary.final_year_roa, Some(5.0));
    }
}
