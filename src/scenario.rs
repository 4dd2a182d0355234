//! Scenario runner for repeated projection runs
//!
//! The interactive surface recomputes the full table on every input change, so
//! this runner keeps a base configuration and spins up a fresh engine per run.
//! Each run is independent and idempotent.

use rayon::prelude::*;

use crate::error::PlanResult;
use crate::plan::PlanInputs;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-configured runner for repeated and batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Recompute with different uniform growth rates
/// let sweep = runner.sweep_growth_rate(&plan, &[0.0, 10.0, 25.0])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a specific base configuration
    pub fn with_config(base_config: ProjectionConfig) -> Self {
        Self { base_config }
    }

    /// Borrow the base configuration
    pub fn config(&self) -> &ProjectionConfig {
        &self.base_config
    }

    /// Run a single projection with the base config
    pub fn run(&self, plan: &PlanInputs) -> PlanResult<ProjectionResult> {
        let engine = ProjectionEngine::new(self.base_config.clone());
        engine.project(plan)
    }

    /// Run a single projection with an overriding config
    pub fn run_with(&self, plan: &PlanInputs, config: ProjectionConfig) -> PlanResult<ProjectionResult> {
        let engine = ProjectionEngine::new(config);
        engine.project(plan)
    }

    /// Re-run the plan with one uniform growth rate applied to every line,
    /// once per candidate rate.
    ///
    /// This mirrors the single growth slider of the interactive surface, where
    /// one rate drives all business lines at once.
    pub fn sweep_growth_rate(
        &self,
        plan: &PlanInputs,
        rates_pct: &[f64],
    ) -> PlanResult<Vec<(f64, ProjectionResult)>> {
        let mut results = Vec::with_capacity(rates_pct.len());
        for &rate in rates_pct {
            let mut variant = plan.clone();
            for line in &mut variant.business_lines {
                line.growth_rate_pct = rate;
            }
            results.push((rate, self.run(&variant)?));
        }
        Ok(results)
    }

    /// Run projections for many plans in parallel with the same config
    pub fn run_batch(&self, plans: &[PlanInputs]) -> Vec<PlanResult<ProjectionResult>> {
        plans
            .par_iter()
            .map(|plan| {
                let engine = ProjectionEngine::new(self.base_config.clone());
                engine.project(plan)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::BusinessLine;

    fn test_plan() -> PlanInputs {
        PlanInputs::with_assets(
            vec![
                BusinessLine::new("Retail", 100.0, 60.0, 10.0),
                BusinessLine::new("Online", 250.0, 180.0, 25.0),
            ],
            2000.0,
        )
    }

    #[test]
    fn test_sweep_growth_rate_is_monotone_for_profitable_lines() {
        let runner = ScenarioRunner::new();
        let sweep = runner
            .sweep_growth_rate(&test_plan(), &[0.0, 10.0, 25.0])
            .unwrap();
        assert_eq!(sweep.len(), 3);

        // Every line is profitable, so a higher uniform rate means a higher
        // final-year total profit.
        let finals: Vec<f64> = sweep
            .iter()
            .map(|(_, result)| result.summary().final_year_profit)
            .collect();
        assert!(finals[0] < finals[1]);
        assert!(finals[1] < finals[2]);
    }

    #[test]
    fn test_sweep_overrides_every_line() {
        let runner = ScenarioRunner::new();
        let sweep = runner.sweep_growth_rate(&test_plan(), &[0.0]).unwrap();
        let (rate, result) = &sweep[0];
        assert_eq!(*rate, 0.0);

        // Flat growth: final year matches year 1 for each line
        for row in &result.rows {
            let y1 = result
                .rows
                .iter()
                .find(|r| r.business_name == row.business_name && r.year == 1)
                .unwrap();
            assert_eq!(row.revenue, y1.revenue);
        }
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::new();
        let plans = vec![test_plan(), test_plan(), test_plan()];
        let results = runner.run_batch(&plans);

        assert_eq!(results.len(), 3);
        let ok: Vec<_> = results.into_iter().map(|r| r.unwrap()).collect();
        // Identical plans yield identical results regardless of scheduling
        assert_eq!(ok[0], ok[1]);
        assert_eq!(ok[1], ok[2]);
    }

    #[test]
    fn test_run_with_overriding_config() {
        let runner = ScenarioRunner::new();
        let result = runner
            .run_with(
                &test_plan(),
                ProjectionConfig {
                    horizon_years: 2,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(result.aggregates.len(), 2);
    }
}
