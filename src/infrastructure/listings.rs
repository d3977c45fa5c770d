use std::collections::HashSet;

use crate::domain::{
    errors::{DataSourceError, DataSourceResult},
    listing::{FilterCriteria, Listing, ListingProvider},
    logging::LogComponent,
};

/// The five sample homes the demo ships with.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing::new("HS-001", "123 Oak St, Sunnyvale, CA 94087", 899_000)
            .with_rooms(3, 2)
            .with_sqft(1420)
            .with_hoa(120)
            .with_history(1989, 12)
            .with_notes(["Remodeled kitchen", "Quiet street", "Central AC"], ["Small yard"]),
        Listing::new("HS-002", "456 Pine Ave, Mountain View, CA 94040", 1_250_000)
            .with_rooms(4, 3)
            .with_sqft(1880)
            .with_history(1978, 7)
            .with_notes(["Near park", "Large backyard"], ["Older roof"]),
        Listing::new("HS-003", "789 Maple Ct, Santa Clara, CA 95050", 779_000)
            .with_rooms(2, 2)
            .with_sqft(980)
            .with_hoa(360)
            .with_history(2010, 30)
            .with_notes(["Turn-key condo", "Gym + pool"], ["Higher HOA"]),
        Listing::new("HS-004", "22 Cherry Ln, Cupertino, CA 95014", 1_595_000)
            .with_rooms(3, 2)
            .with_sqft(1620)
            .with_history(1968, 18)
            .with_notes(["Top schools", "Updated baths"], ["Smaller primary"]),
        Listing::new("HS-005", "910 Birch Dr, San Jose, CA 95126", 899_000)
            .with_rooms(3, 2)
            .with_sqft(1510)
            .with_history(1996, 9)
            .with_notes(["2-car garage", "Near light rail"], ["Some road noise"]),
    ]
}

/// Provider serving the built-in sample set, whatever the criteria
#[derive(Clone)]
pub struct MockListingProvider {
    listings: Vec<Listing>,
}

impl Default for MockListingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockListingProvider {
    pub fn new() -> Self {
        Self { listings: sample_listings() }
    }
}

impl ListingProvider for MockListingProvider {
    fn provide(&self, _criteria: &FilterCriteria) -> Vec<Listing> {
        self.listings.clone()
    }

    fn name(&self) -> &'static str {
        "MockListingProvider"
    }
}

/// Provider backed by a JSON array of listings in the camelCase shape
/// (`{"id": "HS-001", "address": ..., "yearBuilt": 1989, ...}`).
#[derive(Clone, Debug)]
pub struct StaticListingProvider {
    listings: Vec<Listing>,
}

impl StaticListingProvider {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Parse listings from JSON. Ids must be unique.
    pub fn from_json(json: &str) -> DataSourceResult<Self> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id.value()) {
                return Err(DataSourceError::DuplicateId(listing.id.to_string()));
            }
        }

        crate::log_debug!(
            LogComponent::Infrastructure("StaticListingProvider"),
            "Loaded {} listings from JSON",
            listings.len()
        );

        Ok(Self { listings })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingProvider for StaticListingProvider {
    fn provide(&self, _criteria: &FilterCriteria) -> Vec<Listing> {
        self.listings.clone()
    }

    fn name(&self) -> &'static str {
        "StaticListingProvider"
    }
}
