//! AWS Lambda handler for running plan projections
//!
//! Accepts a JSON plan via Lambda Function URLs and returns the projected
//! rows, year aggregates, and summary.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use bizplan_system::projection::{PlanSummary, DEFAULT_GROWTH_CAP_PCT, DEFAULT_HORIZON_YEARS};
use bizplan_system::{
    BusinessLine, PlanError, PlanInputs, ProjectionConfig, ProjectionEngine, ProjectionRow,
    YearAggregate,
};

/// Input configuration for the projection
#[derive(Debug, Deserialize)]
struct ProjectionRequest {
    /// Business lines to project
    business_lines: Vec<BusinessLine>,

    /// Number of years to project (default: 5)
    #[serde(default = "default_horizon_years")]
    horizon_years: u32,

    /// Total assets backing the plan; enables return-on-assets
    #[serde(default)]
    total_assets: Option<f64>,

    /// Growth-rate cap in percent (default: 50)
    #[serde(default)]
    growth_cap_pct: Option<f64>,
}

fn default_horizon_years() -> u32 {
    DEFAULT_HORIZON_YEARS
}

#[derive(Debug, Serialize)]
struct ProjectionResponse {
    rows: Vec<ProjectionRow>,
    aggregates: Vec<YearAggregate>,
    summary: PlanSummary,
    execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn json_response<T: Serialize>(status: u16, value: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(value)?;
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = Instant::now();

    let request: ProjectionRequest = match serde_json::from_slice(event.body()) {
        Ok(request) => request,
        Err(err) => {
            return json_response(
                400,
                &ErrorResponse {
                    error: format!("malformed request: {}", err),
                },
            );
        }
    };

    let config = ProjectionConfig {
        horizon_years: request.horizon_years,
        growth_cap_pct: request.growth_cap_pct.or(Some(DEFAULT_GROWTH_CAP_PCT)),
    };
    let plan = PlanInputs {
        business_lines: request.business_lines,
        total_assets: request.total_assets,
    };

    let engine = ProjectionEngine::new(config);
    match engine.project(&plan) {
        Ok(result) => {
            let summary = result.summary();
            let response = ProjectionResponse {
                rows: result.rows,
                aggregates: result.aggregates,
                summary,
                execution_time_ms: start.elapsed().as_millis() as u64,
            };
            json_response(200, &response)
        }
        Err(err @ PlanError::InvalidInput(_)) => json_response(
            400,
            &ErrorResponse {
                error: err.to_string(),
            },
        ),
        Err(err) => json_response(
            500,
            &ErrorResponse {
                error: err.to_string(),
            },
        ),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
