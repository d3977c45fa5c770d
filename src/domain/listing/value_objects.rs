use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Value Object - listing identifier (`HS-001`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - search filter entered in the form.
///
/// Price bounds are inclusive on both ends. A `min_price` above `max_price`
/// is allowed and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub location: String,
    pub min_price: u64,
    pub max_price: u64,
    pub min_beds: u32,
    pub min_baths: u32,
}

impl FilterCriteria {
    pub fn new(
        location: impl Into<String>,
        min_price: u64,
        max_price: u64,
        min_beds: u32,
        min_baths: u32,
    ) -> Self {
        Self { location: location.into(), min_price, max_price, min_beds, min_baths }
    }

    /// Criteria that accept every listing.
    pub fn any() -> Self {
        Self { max_price: u64::MAX, ..Default::default() }
    }

    /// Whether the location term is blank and therefore matches every address.
    pub fn is_location_blank(&self) -> bool {
        self.location.trim().is_empty()
    }

    /// Boundary check for the form layer; the filter itself never fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_price > self.max_price {
            return Err(ValidationError::PriceRangeInverted {
                min_price: self.min_price,
                max_price: self.max_price,
            });
        }
        Ok(())
    }
}
