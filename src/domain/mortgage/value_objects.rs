use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::errors::ValidationError;
use crate::domain::listing::Listing;

/// Value Object - everything the payment formula needs for one home.
///
/// `hoa` and `insurance` are monthly amounts; `None` is treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanConfig {
    pub price: f64,
    /// Down payment as a fraction of the price (`0.20` for 20%)
    pub down_pct: f64,
    /// Annual interest rate in percent (`6.75`)
    pub rate_pct: f64,
    pub term_years: u32,
    /// Annual property tax in percent of the price (`1.1`)
    pub tax_pct: f64,
    pub insurance: Option<f64>,
    pub hoa: Option<f64>,
}

/// Value Object - the buyer's loan assumptions, independent of any listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub down_pct: f64,
    pub rate_pct: f64,
    pub term_years: u32,
    pub tax_pct: f64,
    pub insurance: f64,
}

impl LoanTerms {
    pub fn new(down_pct: f64, rate_pct: f64, term_years: u32, tax_pct: f64, insurance: f64) -> Self {
        Self { down_pct, rate_pct, term_years, tax_pct, insurance }
    }

    /// Loan configuration for a concrete listing: its price and HOA fee
    /// combined with these assumptions.
    pub fn for_listing(&self, listing: &Listing) -> LoanConfig {
        LoanConfig {
            price: listing.price as f64,
            down_pct: self.down_pct,
            rate_pct: self.rate_pct,
            term_years: self.term_years,
            tax_pct: self.tax_pct,
            insurance: Some(self.insurance),
            hoa: Some(listing.hoa as f64),
        }
    }

    /// Boundary check run by the form layer before quoting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.term_years < 1 {
            return Err(ValidationError::TermTooShort { term_years: self.term_years });
        }
        if !self.down_pct.is_finite() || !(0.0..=1.0).contains(&self.down_pct) {
            return Err(ValidationError::DownPaymentOutOfRange { down_pct: self.down_pct });
        }
        if !self.rate_pct.is_finite() || self.rate_pct < 0.0 {
            return Err(ValidationError::NegativeRate { rate_pct: self.rate_pct });
        }
        if !self.tax_pct.is_finite() || self.tax_pct < 0.0 {
            return Err(ValidationError::NegativeTaxRate { tax_pct: self.tax_pct });
        }
        if !self.insurance.is_finite() || self.insurance < 0.0 {
            return Err(ValidationError::NegativeInsurance { insurance: self.insurance });
        }
        Ok(())
    }
}

/// Value Object - monthly cost components for one listing.
///
/// Amounts are unrounded dollars; rounding happens at display time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Principal and interest
    pub pi: f64,
    pub tax: f64,
    pub hoa: f64,
    pub insurance: f64,
    pub total: f64,
    /// Amount borrowed after the down payment
    pub loan: f64,
    pub down: f64,
}

/// Common loan terms offered in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum TermPreset {
    #[display(fmt = "10 years")]
    #[strum(serialize = "10")]
    Ten,
    #[display(fmt = "15 years")]
    #[strum(serialize = "15")]
    Fifteen,
    #[display(fmt = "20 years")]
    #[strum(serialize = "20")]
    Twenty,
    #[display(fmt = "30 years")]
    #[strum(serialize = "30")]
    Thirty,
}

impl TermPreset {
    pub fn years(&self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::Thirty => 30,
        }
    }
}
