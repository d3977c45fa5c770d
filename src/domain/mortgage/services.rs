use crate::domain::mortgage::{LoanConfig, PaymentBreakdown};

/// Domain service estimating the monthly cost of owning a home
pub struct MortgageCalculator;

impl MortgageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Full monthly breakdown for a loan.
    ///
    /// A zero-year term is not guarded against: the division by zero
    /// surfaces as a non-finite `pi` and `total`.
    pub fn compute_monthly_payment(&self, loan: &LoanConfig) -> PaymentBreakdown {
        let down = loan.price * loan.down_pct;
        let principal = (loan.price - down).max(0.0);
        let pi = monthly_principal_and_interest(principal, loan.rate_pct, loan.term_years);
        let tax = loan.price * (loan.tax_pct / 100.0) / 12.0;
        let hoa = loan.hoa.unwrap_or(0.0);
        let insurance = loan.insurance.unwrap_or(0.0);
        let total = pi + tax + hoa + insurance;

        PaymentBreakdown { pi, tax, hoa, insurance, total, loan: principal, down }
    }
}

impl Default for MortgageCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Amortized monthly payment for `principal` at an annual rate in percent.
///
/// A zero rate falls back to straight-line repayment.
pub fn monthly_principal_and_interest(principal: f64, rate_pct: f64, term_years: u32) -> f64 {
    let r = rate_pct / 100.0 / 12.0;
    let n = term_years as f64 * 12.0;
    if r == 0.0 {
        return principal / n;
    }
    principal * r / (1.0 - (1.0 + r).powf(-n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_straight_line() {
        assert_eq!(monthly_principal_and_interest(300_000.0, 0.0, 10), 2500.0);
    }

    #[test]
    fn zero_term_propagates_non_finite() {
        assert!(!monthly_principal_and_interest(100_000.0, 0.0, 0).is_finite());
        assert!(!monthly_principal_and_interest(100_000.0, 5.0, 0).is_finite());
    }

    #[test]
    fn missing_pass_through_costs_count_as_zero() {
        let loan = LoanConfig {
            price: 100_000.0,
            down_pct: 1.0,
            rate_pct: 5.0,
            term_years: 30,
            tax_pct: 0.0,
            insurance: None,
            hoa: None,
        };
        let breakdown = MortgageCalculator::new().compute_monthly_payment(&loan);
        assert_eq!(breakdown.hoa, 0.0);
        assert_eq!(breakdown.insurance, 0.0);
        assert_eq!(breakdown.loan, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }
}
