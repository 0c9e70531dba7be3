//! Liability calculations: the bracket walk, the jurisdiction policies, and
//! the household aggregate that composes them.

pub mod common;
pub mod household;
pub mod policies;
pub mod schedule;

pub use household::Household;
pub use policies::{
    FederalTax, LocalTax, MedicareTax, PolicyBreakdown, ScheduleTax, SocialSecurityTax, StateTax,
    TaxCategory, TaxPolicy,
};
pub use schedule::Schedule;
