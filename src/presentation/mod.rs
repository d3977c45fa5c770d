pub mod format;
pub mod wasm_api;

pub use format::{breakdown_line, format_currency, join_notes, listing_summary, price_per_sqft_label};
