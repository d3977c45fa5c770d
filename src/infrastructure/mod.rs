//! Adapters: listing data sources, page settings and browser-backed logging.

pub mod listings;
pub mod page;
pub mod services;

pub use listings::{MockListingProvider, StaticListingProvider, sample_listings};
pub use page::{CONFIG_ELEMENT_ID, page_config_text};
pub use services::{BrowserTimeProvider, ConsoleLogger};
