use crate::domain::listing::{FilterCriteria, Listing};

/// Source of listings for a search.
///
/// Implementations may use the criteria to narrow what they fetch, but are
/// not required to: the search service always runs the full filter over
/// whatever comes back.
pub trait ListingProvider {
    fn provide(&self, criteria: &FilterCriteria) -> Vec<Listing>;

    /// Human-readable name used in log lines
    fn name(&self) -> &'static str;
}
