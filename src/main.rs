//! Business Plan System CLI
//!
//! Command-line interface for running multi-year plan projections

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use bizplan_system::advisor::{AdvisoryClient, ChatEndpointClient, Conversation};
use bizplan_system::export::{CsvSink, RunMetadata, TableSink, XlsxSink};
use bizplan_system::plan::load_business_lines;
use bizplan_system::projection::DEFAULT_HORIZON_YEARS;
use bizplan_system::{BusinessLine, PlanInputs, ProjectionConfig, ProjectionEngine};

/// Run a multi-year business plan projection
#[derive(Debug, Parser)]
#[command(name = "planner", version)]
struct Cli {
    /// Plan CSV (Name,BaseRevenue,BaseCost,GrowthRatePct); a built-in demo
    /// plan is used when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of years to project
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    horizon: u32,

    /// Total assets backing the plan; enables return-on-assets
    #[arg(long)]
    assets: Option<f64>,

    /// Accept growth rates above the default 50% cap
    #[arg(long)]
    no_growth_cap: bool,

    /// Where to write the projection CSV
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Also write an XLSX workbook here
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Ask the advisory endpoint for a note on the plan.
    /// Reads BIZPLAN_ADVISOR_ENDPOINT and BIZPLAN_ADVISOR_API_KEY.
    #[arg(long)]
    advise: bool,
}

fn demo_plan() -> Vec<BusinessLine> {
    vec![
        BusinessLine::new("Business 1", 1200.0, 800.0, 10.0),
        BusinessLine::new("Business 2", 600.0, 450.0, 25.0),
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Business Plan System v0.1.0");
    println!("===========================\n");

    let business_lines = match &cli.input {
        Some(path) => load_business_lines(path)
            .with_context(|| format!("failed to load plan from {}", path.display()))?,
        None => demo_plan(),
    };

    let plan = PlanInputs {
        business_lines,
        total_assets: cli.assets,
    };
    let config = ProjectionConfig {
        horizon_years: cli.horizon,
        growth_cap_pct: if cli.no_growth_cap { None } else { ProjectionConfig::default().growth_cap_pct },
    };

    println!("Plan: {} business line(s), {} year horizon", plan.business_lines.len(), config.horizon_years);
    for line in &plan.business_lines {
        println!(
            "  {}: revenue {:.0}, cost {:.0}, growth {:.1}%/yr",
            line.name, line.base_revenue, line.base_cost, line.growth_rate_pct
        );
    }
    println!();

    let engine = ProjectionEngine::new(config);
    let result = engine.project(&plan)?;

    // Print the projection table
    println!("Projection ({} rows):", result.rows.len());
    println!(
        "{:<16} {:>4} {:>12} {:>12} {:>12}",
        "Business", "Year", "Revenue", "Cost", "Profit"
    );
    println!("{}", "-".repeat(60));
    for row in &result.rows {
        println!(
            "{:<16} {:>4} {:>12.2} {:>12.2} {:>12.2}",
            row.business_name, row.year, row.revenue, row.cost, row.profit
        );
    }

    println!("\nYear totals:");
    println!("{:>4} {:>14} {:>8}", "Year", "Total Profit", "ROA %");
    println!("{}", "-".repeat(30));
    for agg in &result.aggregates {
        match agg.return_on_assets {
            Some(roa) => println!("{:>4} {:>14.2} {:>8.2}", agg.year, agg.total_profit, roa),
            None => println!("{:>4} {:>14.2} {:>8}", agg.year, agg.total_profit, "-"),
        }
    }

    // Write exports
    let meta = RunMetadata::new("Multi-Year Business Plan");

    let csv_bytes = CsvSink::new().render(&result, &meta, &[])?;
    std::fs::write(&cli.output, csv_bytes)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("\nFull results written to: {}", cli.output.display());

    if let Some(xlsx_path) = &cli.xlsx {
        let xlsx_bytes = XlsxSink::new().render(&result, &meta, &[])?;
        std::fs::write(xlsx_path, xlsx_bytes)
            .with_context(|| format!("failed to write {}", xlsx_path.display()))?;
        println!("Workbook written to: {}", xlsx_path.display());
    }

    // Print summary
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Horizon: {} years", summary.horizon_years);
    println!("  Business lines: {}", summary.line_count);
    println!("  Cumulative profit: {:.2}", summary.cumulative_profit);
    println!("  Final-year profit: {:.2}", summary.final_year_profit);
    if let Some(roa) = summary.final_year_roa {
        println!("  Final-year ROA: {:.2}%", roa);
    }

    // Advisory note is best-effort: a failure is reported and the projection
    // output above stands as printed.
    if cli.advise {
        match request_advice(&plan) {
            Ok(advice) => println!("\nAdvisory note:\n{}", advice),
            Err(err) => log::warn!("advisory call failed, projection output is unaffected: {}", err),
        }
    }

    Ok(())
}

fn request_advice(plan: &PlanInputs) -> anyhow::Result<String> {
    let endpoint = std::env::var("BIZPLAN_ADVISOR_ENDPOINT")
        .context("BIZPLAN_ADVISOR_ENDPOINT is not set")?;
    let api_key = std::env::var("BIZPLAN_ADVISOR_API_KEY")
        .context("BIZPLAN_ADVISOR_API_KEY is not set")?;

    let mut conversation = Conversation::new();
    for line in &plan.business_lines {
        conversation.record(
            line.name.clone(),
            format!(
                "revenue {:.0}, cost {:.0}, growth {:.1}% per year",
                line.base_revenue, line.base_cost, line.growth_rate_pct
            ),
        );
    }

    let client = ChatEndpointClient::new(endpoint, api_key);
    Ok(client.advise(&conversation)?)
}
