pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{
    Household, PolicyBreakdown, Schedule, TaxCategory, TaxPolicy,
};
pub use error::{InputError, TaxError};
pub use models::*;
