//! Listing aggregate: the listing entity, search criteria, the filter service
//! and the provider abstraction it composes with.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
