//! CSV-based assumption overrides
//!
//! Reads a two-column `name,value` file and overlays the values onto the
//! default assumptions, so rate changes do not require a rebuild.

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::Assumptions;

/// Load `name,value` override pairs from a CSV file
pub fn load_overrides(path: &Path) -> Result<HashMap<String, f64>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut overrides = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let name = record[0].trim().to_string();
        let value: f64 = record[1].trim().parse()?;
        overrides.insert(name, value);
    }

    Ok(overrides)
}

/// Apply override pairs onto an assumptions container.
///
/// Unknown names are skipped with a warning so older override files keep
/// working after fields are renamed.
pub fn apply_overrides(assumptions: &mut Assumptions, overrides: &HashMap<String, f64>) {
    for (name, &value) in overrides {
        match name.as_str() {
            "base_value_min" => assumptions.market.base_value_min = value,
            "base_value_span" => assumptions.market.base_value_span = value,
            "appreciation_min" => assumptions.market.appreciation_min = value,
            "appreciation_span" => assumptions.market.appreciation_span = value,
            "historical_start_factor" => assumptions.market.historical_start_factor = value,
            "historical_drag" => assumptions.market.historical_drag = value,
            "conservative_factor" => assumptions.market.conservative_factor = value,
            "optimistic_factor" => assumptions.market.optimistic_factor = value,
            "down_payment_pct" => assumptions.financing.down_payment_pct = value,
            "closing_cost_pct" => assumptions.financing.closing_cost_pct = value,
            "annual_interest_rate" => assumptions.financing.annual_interest_rate = value,
            "term_months" => assumptions.financing.term_months = value as u32,
            "property_tax_pct" => assumptions.financing.property_tax_pct = value,
            "insurance_pct" => assumptions.financing.insurance_pct = value,
            "monthly_hoa" => assumptions.financing.monthly_hoa = value,
            "long_term_rent_pct" => assumptions.rental.long_term_rent_pct = value,
            "short_term_rent_pct" => assumptions.rental.short_term_rent_pct = value,
            "long_term_vacancy" => assumptions.rental.long_term_vacancy = value,
            "short_term_vacancy" => assumptions.rental.short_term_vacancy = value,
            "long_term_management_pct" => assumptions.rental.long_term_management_pct = value,
            "short_term_management_pct" => assumptions.rental.short_term_management_pct = value,
            "long_term_maintenance_pct" => assumptions.rental.long_term_maintenance_pct = value,
            "short_term_maintenance_pct" => assumptions.rental.short_term_maintenance_pct = value,
            "short_term_furnishing" => assumptions.rental.short_term_furnishing = value,
            "flip_rehab_multiplier" => assumptions.strategy.flip_rehab_multiplier = value,
            "flip_holding_months" => assumptions.strategy.flip_holding_months = value as u32,
            "selling_cost_pct" => assumptions.strategy.selling_cost_pct = value,
            "brrr_rehab_multiplier" => assumptions.strategy.brrr_rehab_multiplier = value,
            "refinance_ltv" => assumptions.strategy.refinance_ltv = value,
            "flip_roi_threshold" => assumptions.strategy.flip_roi_threshold = value,
            "brrr_roi_threshold" => assumptions.strategy.brrr_roi_threshold = value,
            "hold_roi_threshold" => assumptions.strategy.hold_roi_threshold = value,
            "short_term_advantage_ratio" => {
                assumptions.strategy.short_term_advantage_ratio = value
            }
            other => log::warn!("Ignoring unknown assumption override: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_from_csv() {
        let dir = std::env::temp_dir();
        let path = dir.join("analyzer_assumption_overrides_test.csv");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "name,value").unwrap();
            writeln!(file, "annual_interest_rate,0.07").unwrap();
            writeln!(file, "monthly_hoa,0").unwrap();
            writeln!(file, "some_future_knob,1.0").unwrap();
        }

        let assumptions = Assumptions::from_csv_path(&path).unwrap();
        assert_eq!(assumptions.financing.annual_interest_rate, 0.07);
        assert_eq!(assumptions.financing.monthly_hoa, 0.0);
        // Untouched fields keep their defaults
        assert_eq!(assumptions.financing.term_months, 360);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_apply_direct() {
        let mut assumptions = Assumptions::default();
        let mut overrides = HashMap::new();
        overrides.insert("hold_roi_threshold".to_string(), 12.5);
        apply_overrides(&mut assumptions, &overrides);
        assert_eq!(assumptions.strategy.hold_roi_threshold, 12.5);
    }
}
