pub use super::value_objects::{FilterCriteria, ListingId};
use serde::{Deserialize, Serialize};

/// Domain entity - a home for sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub address: String,
    /// Asking price in whole dollars
    pub price: u64,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    /// Monthly HOA fee in whole dollars, `0` when there is none
    #[serde(default)]
    pub hoa: u32,
    pub year_built: i32,
    /// Days on market
    #[serde(default)]
    pub dom: u32,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl Listing {
    pub fn new(id: impl Into<ListingId>, address: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            price,
            beds: 0,
            baths: 0,
            sqft: 0,
            hoa: 0,
            year_built: 0,
            dom: 0,
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    pub fn with_rooms(mut self, beds: u32, baths: u32) -> Self {
        self.beds = beds;
        self.baths = baths;
        self
    }

    pub fn with_sqft(mut self, sqft: u32) -> Self {
        self.sqft = sqft;
        self
    }

    pub fn with_hoa(mut self, hoa: u32) -> Self {
        self.hoa = hoa;
        self
    }

    pub fn with_history(mut self, year_built: i32, dom: u32) -> Self {
        self.year_built = year_built;
        self.dom = dom;
        self
    }

    pub fn with_notes<P, C>(mut self, pros: P, cons: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.pros = pros.into_iter().map(Into::into).collect();
        self.cons = cons.into_iter().map(Into::into).collect();
        self
    }

    /// Asking price per square foot, `None` when the area is unknown
    pub fn price_per_sqft(&self) -> Option<f64> {
        (self.sqft > 0).then(|| self.price as f64 / self.sqft as f64)
    }
}
