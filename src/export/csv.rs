//! CSV serialization of projection rows and aggregates

use super::{ChartImage, ExportError, RunMetadata, TableSink};
use crate::projection::ProjectionResult;

/// CSV sink: the per-line rows followed by the year aggregates.
///
/// Chart images are ignored; CSV is a plain-table format.
#[derive(Debug, Clone, Default)]
pub struct CsvSink;

impl CsvSink {
    pub fn new() -> Self {
        Self
    }
}

impl TableSink for CsvSink {
    fn render(
        &self,
        result: &ProjectionResult,
        _meta: &RunMetadata,
        _charts: &[ChartImage],
    ) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(["Business", "Year", "Revenue", "Cost", "Profit"])?;
        for row in &result.rows {
            writer.write_record([
                row.business_name.clone(),
                row.year.to_string(),
                format!("{:.2}", row.revenue),
                format!("{:.2}", row.cost),
                format!("{:.2}", row.profit),
            ])?;
        }

        // Blank record separates the two tables
        writer.write_record([""; 5])?;
        writer.write_record(["Year", "TotalProfit", "ReturnOnAssetsPct", "", ""])?;
        for agg in &result.aggregates {
            let roa = agg
                .return_on_assets
                .map(|r| format!("{:.2}", r))
                .unwrap_or_default();
            writer.write_record([
                agg.year.to_string(),
                format!("{:.2}", agg.total_profit),
                roa,
                String::new(),
                String::new(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{BusinessLine, PlanInputs};
    use crate::projection::{ProjectionConfig, ProjectionEngine};

    fn sample_result() -> ProjectionResult {
        let plan = PlanInputs::with_assets(
            vec![BusinessLine::new("Retail", 100.0, 60.0, 10.0)],
            1000.0,
        );
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_years: 3,
            ..Default::default()
        });
        engine.project(&plan).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let bytes = CsvSink::new()
            .render(&sample_result(), &RunMetadata::new("Plan"), &[])
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Business,Year,Revenue,Cost,Profit");
        assert_eq!(lines[1], "Retail,1,100.00,60.00,40.00");
        assert_eq!(lines[3], "Retail,3,121.00,72.60,48.40");

        // Aggregate block follows the separator
        assert!(lines.contains(&"Year,TotalProfit,ReturnOnAssetsPct,,"));
        assert!(lines.contains(&"3,48.40,4.84,,"));
    }

    #[test]
    fn test_csv_omits_roa_without_assets() {
        let plan = PlanInputs::new(vec![BusinessLine::new("Retail", 100.0, 60.0, 10.0)]);
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_years: 1,
            ..Default::default()
        });
        let result = engine.project(&plan).unwrap();

        let bytes = CsvSink::new()
            .render(&result, &RunMetadata::new("Plan"), &[])
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.lines().any(|l| l == "1,40.00,,,"));
    }
}
