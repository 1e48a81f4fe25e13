//! Time/compensation aggregation.
//!
//! Everything in here is pure: the functions take immutable snapshots and
//! return numbers, so they can be reused by listings, reports and exports.

pub mod compensation;
pub mod duration;
pub mod expected;
pub mod summary;
pub mod weeks;
