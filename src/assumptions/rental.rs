//! Rental cash-flow assumptions for long-term and short-term operations

use serde::{Deserialize, Serialize};

/// Rent levels, vacancy, and operating expense assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalAssumptions {
    /// Monthly long-term rent as a fraction of property value
    pub long_term_rent_pct: f64,

    /// Monthly short-term rent as a fraction of property value
    pub short_term_rent_pct: f64,

    /// Long-term vacancy rate
    pub long_term_vacancy: f64,

    /// Short-term vacancy rate
    pub short_term_vacancy: f64,

    /// Long-term management fee as a fraction of revenue
    pub long_term_management_pct: f64,

    /// Short-term management fee as a fraction of revenue
    pub short_term_management_pct: f64,

    /// Long-term annual maintenance reserve as a fraction of value
    pub long_term_maintenance_pct: f64,

    /// Short-term annual maintenance reserve as a fraction of value
    pub short_term_maintenance_pct: f64,

    /// Flat annual short-term furnishing and turnover surcharge
    pub short_term_furnishing: f64,

    /// Number of projection years
    pub projection_years: u32,
}

impl Default for RentalAssumptions {
    fn default() -> Self {
        Self {
            long_term_rent_pct: 0.008,
            short_term_rent_pct: 0.012,
            long_term_vacancy: 0.08,
            short_term_vacancy: 0.15,
            long_term_management_pct: 0.10,
            short_term_management_pct: 0.20,
            long_term_maintenance_pct: 0.01,
            short_term_maintenance_pct: 0.02,
            short_term_furnishing: 6_000.0,
            projection_years: 3,
        }
    }
}

impl RentalAssumptions {
    /// Monthly long-term market rent for a property of the given value
    pub fn long_term_monthly_rent(&self, base_value: f64) -> f64 {
        base_value * self.long_term_rent_pct
    }

    /// Monthly short-term market rent for a property of the given value
    pub fn short_term_monthly_rent(&self, base_value: f64) -> f64 {
        base_value * self.short_term_rent_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rents() {
        let rental = RentalAssumptions::default();
        assert_eq!(rental.long_term_monthly_rent(400_000.0), 3_200.0);
        assert_eq!(rental.short_term_monthly_rent(400_000.0), 4_800.0);
        assert_eq!(rental.projection_years, 3);
    }
}
