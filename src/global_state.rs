//! Form and result state shared by the UI components.
//!
//! The domain never sees these signals; a search snapshots the current
//! criteria and terms by value.

use crate::application::{HomeSearchService, ListingQuote};
use crate::config::SearchDefaults;
use crate::domain::listing::{FilterCriteria, ListingProvider};
use crate::domain::mortgage::LoanTerms;
use crate::global_signals;
use leptos::*;

global_signals! {
    seed defaults: SearchDefaults;
    /// Filter inputs of the search form
    pub fn search_criteria() -> criteria: FilterCriteria = defaults.criteria;
    /// Loan assumptions of the search form
    pub fn loan_terms() -> terms: LoanTerms = defaults.terms;
    pub fn search_results() -> results: Vec<ListingQuote> = Vec::new();
    /// Set after the first search so an empty result can say so
    pub fn has_searched() -> has_searched: bool = false;
    pub fn search_error() -> search_error: Option<String> = None;
}

/// Globals seeded with the built-in defaults when nothing seeded them first
pub fn globals() -> &'static Globals {
    init_globals(SearchDefaults::default())
}

/// Run a search with the current form values and publish the outcome.
pub fn run_search<P: ListingProvider>(service: &HomeSearchService<P>) {
    let criteria = search_criteria().get_untracked();
    let terms = loan_terms().get_untracked();

    match service.search_validated(&criteria, &terms) {
        Ok(quotes) => {
            search_error().set(None);
            search_results().set(quotes);
        }
        Err(err) => {
            search_error().set(Some(err.to_string()));
            search_results().set(Vec::new());
        }
    }
    has_searched().set(true);
}
