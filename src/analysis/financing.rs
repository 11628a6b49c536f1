//! Purchase cost breakdown and mortgage amortization

use serde::{Deserialize, Serialize};

use crate::assumptions::FinancingAssumptions;

/// Upfront and recurring costs for acquiring the property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    pub closing_costs: f64,
    pub rehab_cost: f64,

    /// down_payment + closing_costs + rehab_cost
    pub total_initial_investment: f64,

    pub monthly_mortgage_payment: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_hoa: f64,

    /// Sum of the four monthly components
    pub total_monthly_cost: f64,
}

impl CostBreakdown {
    /// Compute the full breakdown for a purchase at `base_value` with the
    /// given rehab budget.
    pub fn compute(base_value: f64, rehab_cost: f64, financing: &FinancingAssumptions) -> Self {
        let down_payment = base_value * financing.down_payment_pct;
        let loan_amount = base_value * financing.loan_pct();
        let closing_costs = base_value * financing.closing_cost_pct;

        let monthly_mortgage_payment =
            monthly_payment(loan_amount, financing.monthly_rate(), financing.term_months);
        let monthly_property_tax = base_value * financing.property_tax_pct / 12.0;
        let monthly_insurance = base_value * financing.insurance_pct / 12.0;
        let monthly_hoa = financing.monthly_hoa;

        Self {
            purchase_price: base_value,
            down_payment,
            loan_amount,
            closing_costs,
            rehab_cost,
            total_initial_investment: down_payment + closing_costs + rehab_cost,
            monthly_mortgage_payment,
            monthly_property_tax,
            monthly_insurance,
            monthly_hoa,
            total_monthly_cost: monthly_mortgage_payment
                + monthly_property_tax
                + monthly_insurance
                + monthly_hoa,
        }
    }
}

/// Fixed-rate fully-amortizing monthly payment.
///
/// `P = L * r(1+r)^n / ((1+r)^n - 1)`; a zero rate degenerates to straight
/// principal repayment `L / n`.
pub fn monthly_payment(loan_amount: f64, monthly_rate: f64, term_months: u32) -> f64 {
    let n = term_months as f64;
    if monthly_rate == 0.0 {
        return loan_amount / n;
    }
    let growth = (1.0 + monthly_rate).powf(n);
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}
