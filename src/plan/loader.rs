//! Load business lines from a plan CSV

use super::BusinessLine;
use crate::error::PlanResult;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the plan input columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "BaseRevenue")]
    base_revenue: f64,
    #[serde(rename = "BaseCost")]
    base_cost: f64,
    #[serde(rename = "GrowthRatePct")]
    growth_rate_pct: f64,
}

impl CsvRow {
    fn to_business_line(self) -> BusinessLine {
        BusinessLine {
            name: self.name,
            base_revenue: self.base_revenue,
            base_cost: self.base_cost,
            growth_rate_pct: self.growth_rate_pct,
        }
    }
}

/// Load all business lines from a CSV file.
///
/// Range checks happen later in engine validation; this only rejects rows the
/// CSV reader cannot parse.
pub fn load_business_lines<P: AsRef<Path>>(path: P) -> PlanResult<Vec<BusinessLine>> {
    let mut reader = Reader::from_path(path)?;
    let mut lines = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        lines.push(row.to_business_line());
    }

    log::debug!("loaded {} business lines", lines.len());
    Ok(lines)
}

/// Load business lines from any reader (e.g., string buffer, network stream)
pub fn load_business_lines_from_reader<R: std::io::Read>(
    reader: R,
) -> PlanResult<Vec<BusinessLine>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut lines = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        lines.push(row.to_business_line());
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,BaseRevenue,BaseCost,GrowthRatePct
Retail,100,60,10
Online,250,180,25
";

    #[test]
    fn test_load_from_reader() {
        let lines = load_business_lines_from_reader(SAMPLE.as_bytes())
            .expect("Failed to parse sample plan");
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].name, "Retail");
        assert_eq!(lines[0].base_revenue, 100.0);
        assert_eq!(lines[0].base_cost, 60.0);
        assert_eq!(lines[0].growth_rate_pct, 10.0);

        assert_eq!(lines[1].name, "Online");
        assert_eq!(lines[1].growth_rate_pct, 25.0);
    }

    #[test]
    fn test_load_rejects_malformed_row() {
        let malformed = "\
Name,BaseRevenue,BaseCost,GrowthRatePct
Retail,not-a-number,60,10
";
        assert!(load_business_lines_from_reader(malformed.as_bytes()).is_err());
    }

    #[test]
    fn test_load_preserves_order() {
        let lines = load_business_lines_from_reader(SAMPLE.as_bytes()).unwrap();
        let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Retail", "Online"]);
    }
}
