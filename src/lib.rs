//! Business Plan System - Multi-year projection engine for business planning
//!
//! This library provides:
//! - Compounding-growth projections per business line with year aggregates
//! - Return-on-assets metrics when an asset base is supplied
//! - Plan loading from CSV and scenario/batch runs
//! - Spreadsheet export (CSV, XLSX) behind a narrow sink trait
//! - An advisory chat-endpoint client with explicit conversation state

pub mod advisor;
pub mod error;
pub mod export;
pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{PlanError, PlanResult};
pub use plan::{BusinessLine, PlanInputs};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionRow, YearAggregate};
pub use scenario::ScenarioRunner;
