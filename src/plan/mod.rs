//! Business plan inputs: line records and CSV loading

mod data;
pub mod loader;

pub use data::{BusinessLine, PlanInputs};
pub use loader::{load_business_lines, load_business_lines_from_reader};
