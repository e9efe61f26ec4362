//! Session crate for the course recommendation engine.
//!
//! This crate holds the explicit session object that ties the catalog, both
//! recommenders and their persistence together for the front ends.

pub mod session;

pub use session::{Session, parse_interest_list};
