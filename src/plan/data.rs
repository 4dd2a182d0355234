//! Business plan input records

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// A single revenue-generating unit projected independently.
///
/// Base figures are the year-1 values; growth compounds from year 2 onward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessLine {
    /// Display name, unique within a plan
    pub name: String,

    /// Annual revenue in year 1
    pub base_revenue: f64,

    /// Annual cost in year 1
    pub base_cost: f64,

    /// Annual growth rate in percent, applied to revenue and cost
    pub growth_rate_pct: f64,
}

impl BusinessLine {
    /// Create a new business line
    pub fn new(
        name: impl Into<String>,
        base_revenue: f64,
        base_cost: f64,
        growth_rate_pct: f64,
    ) -> Self {
        Self {
            name: name.into(),
            base_revenue,
            base_cost,
            growth_rate_pct,
        }
    }

    /// Multiplicative growth factor per year (1.10 for 10%)
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.growth_rate_pct / 100.0
    }

    /// Validate base figures and growth rate against an optional cap
    pub fn validate(&self, growth_cap_pct: Option<f64>) -> PlanResult<()> {
        if self.name.trim().is_empty() {
            return Err(PlanError::invalid("business line name must not be empty"));
        }
        if !self.base_revenue.is_finite() || !self.base_cost.is_finite() {
            return Err(PlanError::invalid(format!(
                "business line '{}': base figures must be finite numbers",
                self.name
            )));
        }
        if self.base_revenue < 0.0 {
            return Err(PlanError::invalid(format!(
                "business line '{}': base revenue must not be negative (got {})",
                self.name, self.base_revenue
            )));
        }
        if self.base_cost < 0.0 {
            return Err(PlanError::invalid(format!(
                "business line '{}': base cost must not be negative (got {})",
                self.name, self.base_cost
            )));
        }
        if !self.growth_rate_pct.is_finite() || self.growth_rate_pct < 0.0 {
            return Err(PlanError::invalid(format!(
                "business line '{}': growth rate must be a non-negative percentage (got {})",
                self.name, self.growth_rate_pct
            )));
        }
        if let Some(cap) = growth_cap_pct {
            if self.growth_rate_pct > cap {
                return Err(PlanError::invalid(format!(
                    "business line '{}': growth rate {}% exceeds the configured cap of {}%",
                    self.name, self.growth_rate_pct, cap
                )));
            }
        }
        Ok(())
    }
}

/// A complete set of inputs for one projection run.
///
/// Immutable once a run starts; any input change means a full recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInputs {
    /// Ordered business lines, at least one
    pub business_lines: Vec<BusinessLine>,

    /// Total assets backing the plan; enables return-on-assets when positive
    #[serde(default)]
    pub total_assets: Option<f64>,
}

impl PlanInputs {
    /// Create plan inputs without an asset base
    pub fn new(business_lines: Vec<BusinessLine>) -> Self {
        Self {
            business_lines,
            total_assets: None,
        }
    }

    /// Create plan inputs with a total asset base
    pub fn with_assets(business_lines: Vec<BusinessLine>, total_assets: f64) -> Self {
        Self {
            business_lines,
            total_assets: Some(total_assets),
        }
    }

    /// Asset base used for return-on-assets, if usable.
    ///
    /// Absent or zero assets suppress ROA rather than dividing by zero.
    pub fn assets_for_roa(&self) -> Option<f64> {
        match self.total_assets {
            Some(assets) if assets > 0.0 => Some(assets),
            _ => None,
        }
    }

    /// Validate the whole plan against an optional growth cap
    pub fn validate(&self, growth_cap_pct: Option<f64>) -> PlanResult<()> {
        if self.business_lines.is_empty() {
            return Err(PlanError::invalid(
                "plan must contain at least one business line",
            ));
        }
        for line in &self.business_lines {
            line.validate(growth_cap_pct)?;
        }
        for (i, line) in self.business_lines.iter().enumerate() {
            if self.business_lines[..i].iter().any(|other| other.name == line.name) {
                return Err(PlanError::invalid(format!(
                    "duplicate business line name '{}'",
                    line.name
                )));
            }
        }
        if let Some(assets) = self.total_assets {
            if !assets.is_finite() || assets < 0.0 {
                return Err(PlanError::invalid(format!(
                    "total assets must be a non-negative finite number (got {})",
                    assets
                )));
            }
        }
        Ok(())
    }
}
