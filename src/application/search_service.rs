use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::ValidationResult,
    listing::{FilterCriteria, Listing, ListingFilter, ListingProvider},
    logging::LogComponent,
    mortgage::{LoanTerms, MortgageCalculator, PaymentBreakdown},
};

/// A matched listing together with its estimated monthly cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingQuote {
    pub listing: Listing,
    pub payment: PaymentBreakdown,
}

/// Application service: fetch listings, filter them, quote each match.
pub struct HomeSearchService<P: ListingProvider> {
    provider: P,
    filter: ListingFilter,
    calculator: MortgageCalculator,
}

impl<P: ListingProvider> HomeSearchService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            filter: ListingFilter::new(),
            calculator: MortgageCalculator::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Listings matching the criteria, in provider order.
    pub fn find(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        let candidates = self.provider.provide(criteria);
        let matches = self.filter.filter(&candidates, criteria);

        crate::log_debug!(
            LogComponent::Application("HomeSearch"),
            "{} of {} listings from {} match {:?}",
            matches.len(),
            candidates.len(),
            self.provider.name(),
            criteria
        );

        matches
    }

    /// Filter and quote. Never fails; degenerate inputs give empty or
    /// non-finite results.
    pub fn search(&self, criteria: &FilterCriteria, terms: &LoanTerms) -> Vec<ListingQuote> {
        let quotes: Vec<ListingQuote> = self
            .find(criteria)
            .into_iter()
            .map(|listing| {
                let payment = self.calculator.compute_monthly_payment(&terms.for_listing(&listing));
                ListingQuote { listing, payment }
            })
            .collect();

        let non_finite = quotes.iter().filter(|q| !q.payment.total.is_finite()).count();
        if non_finite > 0 {
            crate::log_warn!(
                LogComponent::Application("HomeSearch"),
                "{} quotes have a non-finite monthly total (terms: {:?})",
                non_finite,
                terms
            );
        }

        crate::log_info!(
            LogComponent::Application("HomeSearch"),
            "Search returned {} homes",
            quotes.len()
        );

        quotes
    }

    /// Like [`search`](Self::search), but rejects out-of-range criteria or
    /// loan terms up front.
    pub fn search_validated(
        &self,
        criteria: &FilterCriteria,
        terms: &LoanTerms,
    ) -> ValidationResult<Vec<ListingQuote>> {
        if let Err(err) = criteria.validate().and_then(|_| terms.validate()) {
            crate::log_warn!(
                LogComponent::Application("HomeSearch"),
                "Rejected search: {}",
                err
            );
            return Err(err);
        }
        Ok(self.search(criteria, terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MockListingProvider;

    fn terms() -> LoanTerms {
        LoanTerms::new(0.20, 6.75, 30, 1.1, 120.0)
    }

    #[test]
    fn quotes_follow_provider_order() {
        let service = HomeSearchService::new(MockListingProvider::new());
        let criteria = FilterCriteria::new("", 0, 2_000_000, 3, 2);
        let ids: Vec<String> = service
            .search(&criteria, &terms())
            .into_iter()
            .map(|q| q.listing.id.to_string())
            .collect();
        assert_eq!(ids, vec!["HS-001", "HS-002", "HS-004", "HS-005"]);
    }

    #[test]
    fn hoa_comes_from_listing() {
        let service = HomeSearchService::new(MockListingProvider::new());
        let criteria = FilterCriteria::new("santa clara", 0, u64::MAX, 0, 0);
        let quotes = service.search(&criteria, &terms());
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].payment.hoa, 360.0);
        assert_eq!(quotes[0].payment.insurance, 120.0);
    }

    #[test]
    fn validated_search_rejects_zero_term() {
        let service = HomeSearchService::new(MockListingProvider::new());
        let bad = LoanTerms::new(0.20, 6.75, 0, 1.1, 120.0);
        let result = service.search_validated(&FilterCriteria::any(), &bad);
        assert!(matches!(
            result,
            Err(crate::domain::errors::ValidationError::TermTooShort { term_years: 0 })
        ));
    }
}
