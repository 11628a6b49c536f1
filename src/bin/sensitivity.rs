//! Sensitivity sweep across many valuation seeds
//!
//! Runs the same property through a large number of synthesized market
//! draws in parallel and reports how often each recommendation wins,
//! plus per-seed strategy figures as CSV.

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use real_estate_analyzer::analysis::{AnalysisResult, BrrrRoi};
use real_estate_analyzer::property::loader::load_properties;
use real_estate_analyzer::{AnalysisRunner, PropertyInput};

const DEFAULT_TRIALS: u64 = 10_000;

fn main() {
    env_logger::init();

    let start = Instant::now();

    let mut args = std::env::args().skip(1);
    let trials: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_TRIALS);
    let properties_csv = args.next();

    // Either a property list from CSV or a single representative subject
    let properties: Vec<PropertyInput> = match properties_csv {
        Some(path) => load_properties(&path).expect("Failed to load properties CSV"),
        None => vec![PropertyInput::new(
            "123 Main Street",
            "Austin",
            "TX",
            "78701",
            25_000.0,
        )],
    };

    println!(
        "Running {} trials for {} propert{}...",
        trials,
        properties.len(),
        if properties.len() == 1 { "y" } else { "ies" }
    );

    let runner = AnalysisRunner::new();

    let results: Vec<(u64, AnalysisResult)> = properties
        .iter()
        .flat_map(|input| {
            (0..trials)
                .into_par_iter()
                .map(|seed| {
                    let result = runner
                        .run_with_seed(input, seed)
                        .expect("Analysis failed on valid input");
                    (seed, result)
                })
                .collect::<Vec<_>>()
        })
        .collect();

    println!("Trials complete in {:?}", start.elapsed());

    // Write per-trial rows
    let output_path = "sensitivity_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");
    writeln!(
        file,
        "Seed,Address,BaseValue,AppreciationRate,FlipROI,BrrrROI,HoldROI,Recommendation"
    )
    .unwrap();

    for (seed, result) in &results {
        let brrr_roi = match &result.strategies.brrr.roi {
            BrrrRoi::CashOnCash(pct) => format!("{:.4}", pct),
            BrrrRoi::FullyRecovered => "inf".to_string(),
        };
        writeln!(
            file,
            "{},{:?},{:.0},{:.6},{:.4},{},{:.4},{:?}",
            seed,
            result.property.address,
            result.seed.base_value,
            result.seed.appreciation_rate,
            result.strategies.flip.roi,
            brrr_roi,
            result.strategies.hold.roi,
            result.recommendation.strategy,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Recommendation distribution
    let mut distribution: BTreeMap<String, usize> = BTreeMap::new();
    for (_, result) in &results {
        *distribution
            .entry(result.recommendation.strategy.label().to_string())
            .or_default() += 1;
    }

    println!("\nRecommendation distribution:");
    let total = results.len() as f64;
    for (label, count) in &distribution {
        println!(
            "  {:<20} {:>8} ({:.1}%)",
            label,
            count,
            *count as f64 / total * 100.0
        );
    }

    let mean_hold_roi: f64 =
        results.iter().map(|(_, r)| r.strategies.hold.roi).sum::<f64>() / total;
    println!("\nMean hold ROI: {:.2}%", mean_hold_roi);
    println!("Total time: {:?}", start.elapsed());
}
