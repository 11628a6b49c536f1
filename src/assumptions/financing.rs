//! Purchase financing assumptions

use serde::{Deserialize, Serialize};

/// Fixed-rate conventional financing terms and recurring carrying costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingAssumptions {
    /// Down payment as a fraction of purchase price
    pub down_payment_pct: f64,

    /// Closing costs as a fraction of purchase price
    pub closing_cost_pct: f64,

    /// Nominal annual interest rate on the mortgage
    pub annual_interest_rate: f64,

    /// Amortization term in monthly periods
    pub term_months: u32,

    /// Annual property tax as a fraction of value
    pub property_tax_pct: f64,

    /// Annual insurance as a fraction of value
    pub insurance_pct: f64,

    /// Flat monthly HOA dues
    pub monthly_hoa: f64,
}

impl Default for FinancingAssumptions {
    fn default() -> Self {
        Self {
            down_payment_pct: 0.20,
            closing_cost_pct: 0.03,
            annual_interest_rate: 0.065,
            term_months: 360,
            property_tax_pct: 0.012,
            insurance_pct: 0.004,
            monthly_hoa: 150.0,
        }
    }
}

impl FinancingAssumptions {
    /// Monthly interest rate on the mortgage
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate / 12.0
    }

    /// Loan amount as a fraction of purchase price
    pub fn loan_pct(&self) -> f64 {
        1.0 - self.down_payment_pct
    }
}
