//! Mortgage aggregate: loan assumptions, payment breakdown and the calculator.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
