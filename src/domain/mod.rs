pub mod errors;
pub mod listing;
pub mod logging;
pub mod mortgage;
