//! Core projection engine for multi-year compounding-growth plans

use super::table::{ProjectionResult, ProjectionRow, YearAggregate};
use crate::error::{PlanError, PlanResult};
use crate::plan::PlanInputs;

/// Default number of years to project (the classic five-year plan)
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Default upper bound on annual growth rates in percent
pub const DEFAULT_GROWTH_CAP_PCT: f64 = 50.0;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of years to project, at least 1
    pub horizon_years: u32,

    /// Upper bound on per-line growth rates in percent.
    /// `None` accepts any non-negative rate.
    pub growth_cap_pct: Option<f64>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            growth_cap_pct: Some(DEFAULT_GROWTH_CAP_PCT),
        }
    }
}

/// Main projection engine.
///
/// Pure and deterministic: identical inputs always yield identical outputs,
/// with no I/O and no state carried between runs.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Borrow the engine's configuration
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run a projection for a complete plan.
    ///
    /// Validates eagerly and fails with `InvalidInput` rather than producing
    /// NaN or infinite rows. Row order is stable: plan line order, then year
    /// ascending. Aggregates are year ascending.
    pub fn project(&self, plan: &PlanInputs) -> PlanResult<ProjectionResult> {
        if self.config.horizon_years < 1 {
            return Err(PlanError::invalid("horizon must be at least 1 year"));
        }
        plan.validate(self.config.growth_cap_pct)?;

        let horizon = self.config.horizon_years;
        let assets = plan.assets_for_roa();

        let mut rows = Vec::with_capacity(plan.business_lines.len() * horizon as usize);
        // Raw profit totals per year, summed in line order before any rounding
        let mut profit_by_year = vec![0.0_f64; horizon as usize];

        for line in &plan.business_lines {
            let factor = line.growth_factor();
            for year in 1..=horizon {
                // Exponent 0 at year 1, so base figures pass through exactly
                let compounded = factor.powi((year - 1) as i32);
                let revenue = line.base_revenue * compounded;
                let cost = line.base_cost * compounded;
                let profit = revenue - cost;

                profit_by_year[(year - 1) as usize] += profit;
                rows.push(ProjectionRow {
                    business_name: line.name.clone(),
                    year,
                    revenue,
                    cost,
                    profit,
                });
            }
        }

        let aggregates = profit_by_year
            .into_iter()
            .enumerate()
            .map(|(i, total_profit)| YearAggregate::new(i as u32 + 1, total_profit, assets))
            .collect();

        Ok(ProjectionResult { rows, aggregates })
    }
}
