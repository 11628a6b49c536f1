//! Real Estate Analyzer CLI
//!
//! Runs one analysis for a subject property and prints the full report

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use real_estate_analyzer::analysis::{AnalysisConfig, AnalysisEngine, BrrrRoi};
use real_estate_analyzer::random::{RandomSource, SplitMix64};
use real_estate_analyzer::{Assumptions, PropertyInput};

#[derive(Parser)]
#[command(
    name = "real_estate_analyzer",
    about = "Residential property investment analysis"
)]
struct Cli {
    /// Street address line
    #[arg(long)]
    street: String,

    /// City name
    #[arg(long)]
    city: String,

    /// State abbreviation
    #[arg(long)]
    state: String,

    /// ZIP code
    #[arg(long)]
    zip: String,

    /// Rehabilitation budget in dollars (0 for turnkey)
    #[arg(long, default_value_t = 0.0)]
    rehab_cost: f64,

    /// Fixed generator seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Assumption override CSV (name,value rows)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Write the full result as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("failed to load assumptions: {}", e))?,
        None => Assumptions::default(),
    };

    let input = PropertyInput::new(cli.street, cli.city, cli.state, cli.zip, cli.rehab_cost);

    let mut rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SplitMix64::seeded(seed)),
        None => Box::new(SplitMix64::from_entropy()),
    };

    let engine = AnalysisEngine::new(assumptions, AnalysisConfig::default());
    let result = engine.analyze(&input, rng.as_mut())?;

    println!("Real Estate Analyzer v0.1.0");
    println!("===========================\n");

    println!("Property: {}", result.property.address);
    println!("  Current Value:     ${:.0}", result.property.current_value);
    println!(
        "  Appreciation Rate: {:.2}%/yr",
        result.property.appreciation_rate * 100.0
    );
    println!();

    println!("Recommendation: {}", result.recommendation.strategy.label());
    println!("  {}", result.recommendation.rationale);
    println!();

    println!("Value Timeline:");
    println!("{:>6} {:>12} {:>12} {:>12}", "Year", "Value", "Conserv.", "Optim.");
    for p in &result.timeline.historical {
        println!("{:>6} {:>12.0} {:>12} {:>12}", p.year, p.value, "-", "-");
    }
    for p in result.timeline.projected.iter().skip(1) {
        println!(
            "{:>6} {:>12.0} {:>12.0} {:>12.0}",
            p.year, p.projected, p.conservative, p.optimistic
        );
    }
    println!();

    let costs = &result.costs;
    println!("Investment Details (20% Down):");
    println!("  Purchase Price:   ${:.0}", costs.purchase_price);
    println!("  Down Payment:     ${:.0}", costs.down_payment);
    println!("  Closing Costs:    ${:.0}", costs.closing_costs);
    println!("  Rehab Costs:      ${:.0}", costs.rehab_cost);
    println!("  Total Initial:    ${:.0}", costs.total_initial_investment);
    println!();
    println!("Monthly Carrying Costs:");
    println!("  Mortgage (P&I):   ${:.2}", costs.monthly_mortgage_payment);
    println!("  Property Tax:     ${:.2}", costs.monthly_property_tax);
    println!("  Insurance:        ${:.2}", costs.monthly_insurance);
    println!("  HOA:              ${:.2}", costs.monthly_hoa);
    println!("  Total Monthly:    ${:.2}", costs.total_monthly_cost);
    println!();

    println!("3-Year Rental Projections:");
    println!(
        "{:>6} {:>14} {:>14} {:>14} {:>14}",
        "Year", "LT Revenue", "LT Profit", "ST Revenue", "ST Profit"
    );
    for r in &result.rentals {
        println!(
            "{:>6} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
            r.year, r.long_term_revenue, r.long_term_profit, r.short_term_revenue, r.short_term_profit
        );
    }
    println!();

    let s = &result.strategies;
    println!("Investment Strategy Analysis:");
    println!("  Fix & Flip:  profit ${:.0}, ROI {:.1}%", s.flip.profit, s.flip.roi);
    match &s.brrr.roi {
        BrrrRoi::CashOnCash(pct) => println!(
            "  BRRR:        recovered ${:.0}, left in deal ${:.0}, cash-on-cash {:.1}%",
            s.brrr.cash_recovered, s.brrr.cash_left_in_deal, pct
        ),
        BrrrRoi::FullyRecovered => println!(
            "  BRRR:        recovered ${:.0}, investment fully recovered (cash-on-cash ∞)",
            s.brrr.cash_recovered
        ),
    }
    println!(
        "  Buy & Hold:  total return ${:.0}, ROI {:.1}%",
        s.hold.total_return, s.hold.roi
    );

    let summary = result.summary();
    println!();
    println!("Summary:");
    println!("  3-Year LT Profit:  ${:.0}", summary.total_long_term_profit);
    println!("  3-Year ST Profit:  ${:.0}", summary.total_short_term_profit);
    println!("  5-Year Projection: ${:.0}", summary.final_projected_value);

    if let Some(path) = &cli.json {
        let mut file = File::create(path)?;
        let json = serde_json::to_string_pretty(&result)?;
        file.write_all(json.as_bytes())?;
        println!("\nFull result written to: {}", path.display());
    }

    Ok(())
}
