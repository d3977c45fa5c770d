use crate::domain::listing::{FilterCriteria, Listing};

impl FilterCriteria {
    /// Returns `true` when the listing satisfies every predicate:
    /// location substring (case-insensitive), inclusive price range,
    /// minimum beds and minimum baths.
    pub fn matches(&self, listing: &Listing) -> bool {
        let location_ok = self.is_location_blank()
            || listing
                .address
                .to_lowercase()
                .contains(&self.location.to_lowercase());
        let price_ok = listing.price >= self.min_price && listing.price <= self.max_price;
        let beds_ok = listing.beds >= self.min_beds;
        let baths_ok = listing.baths >= self.min_baths;

        location_ok && price_ok && beds_ok && baths_ok
    }
}

/// Domain service selecting the listings that match a search
pub struct ListingFilter;

impl ListingFilter {
    pub fn new() -> Self {
        Self
    }

    /// Stable filter: matching listings keep their input order.
    pub fn filter(&self, listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
        listings
            .iter()
            .filter(|listing| criteria.matches(listing))
            .cloned()
            .collect()
    }

    /// Number of listings the criteria would keep
    pub fn count_matches(&self, listings: &[Listing], criteria: &FilterCriteria) -> usize {
        listings.iter().filter(|listing| criteria.matches(listing)).count()
    }
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self::new()
    }
}
