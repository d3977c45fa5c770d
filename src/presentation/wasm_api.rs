use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::{
    application::HomeSearchService,
    domain::{
        listing::FilterCriteria,
        logging::LogComponent,
        mortgage::{LoanConfig, LoanTerms, MortgageCalculator},
    },
    infrastructure::{StaticListingProvider, sample_listings},
};

/// JavaScript bridge for hosts that render their own UI.
///
/// Inputs and outputs are plain objects in the camelCase shape of the
/// domain types.
#[wasm_bindgen]
pub struct HomeScoutApi {
    service: HomeSearchService<StaticListingProvider>,
}

#[wasm_bindgen]
impl HomeScoutApi {
    /// API over the built-in sample listings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let provider = StaticListingProvider::new(sample_listings());
        Self { service: HomeSearchService::new(provider) }
    }

    /// API over listings supplied as a JSON array
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<HomeScoutApi, JsValue> {
        let provider = StaticListingProvider::from_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { service: HomeSearchService::new(provider) })
    }

    /// `searchHomes(criteria, terms)` → array of `{ listing, payment }`
    #[wasm_bindgen(js_name = searchHomes)]
    pub fn search_homes(&self, criteria: JsValue, terms: JsValue) -> Result<JsValue, JsValue> {
        let criteria: FilterCriteria = criteria
            .into_serde()
            .map_err(|e| JsValue::from_str(&format!("Invalid criteria: {}", e)))?;
        let terms: LoanTerms = terms
            .into_serde()
            .map_err(|e| JsValue::from_str(&format!("Invalid loan terms: {}", e)))?;

        let quotes = self
            .service
            .search_validated(&criteria, &terms)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        JsValue::from_serde(&quotes).map_err(|e| {
            crate::log_error!(
                LogComponent::Presentation("HomeScoutApi"),
                "Failed to serialize quotes: {}",
                e
            );
            JsValue::from_str(&e.to_string())
        })
    }
}

impl Default for HomeScoutApi {
    fn default() -> Self {
        Self::new()
    }
}

/// `monthlyPayment(loan)` → `{ pi, tax, hoa, insurance, total, loan, down }`
#[wasm_bindgen(js_name = monthlyPayment)]
pub fn monthly_payment(loan: JsValue) -> Result<JsValue, JsValue> {
    let loan: LoanConfig = loan
        .into_serde()
        .map_err(|e| JsValue::from_str(&format!("Invalid loan: {}", e)))?;
    let breakdown = MortgageCalculator::new().compute_monthly_payment(&loan);
    JsValue::from_serde(&breakdown).map_err(|e| JsValue::from_str(&e.to_string()))
}
