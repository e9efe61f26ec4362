//! Validation of values typed in by the user.
//!
//! The recommenders accept any rating; the console is where the 1-5 range
//! is enforced.

use anyhow::{Result, anyhow, bail};
use data_loader::{Catalog, RatingValue};

pub const MIN_RATING: RatingValue = 1.0;
pub const MAX_RATING: RatingValue = 5.0;

/// Parse a rating and check it is within 1-5
pub fn parse_rating(raw: &str) -> Result<RatingValue> {
    let rating: RatingValue = raw
        .trim()
        .parse()
        .map_err(|_| anyhow!("Rating must be a number, got {:?}", raw.trim()))?;
    check_rating(rating)
}

pub fn check_rating(rating: RatingValue) -> Result<RatingValue> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        bail!("Rating must be between {} and {}, got {}", MIN_RATING, MAX_RATING, rating);
    }
    Ok(rating)
}

/// Make sure `course_id` names a course in the catalog
pub fn check_course<'a>(catalog: &Catalog, course_id: &'a str) -> Result<&'a str> {
    let course_id = course_id.trim();
    if !catalog.contains(course_id) {
        bail!("Course ID {} not found in catalog", course_id);
    }
    Ok(course_id)
}

/// Make sure a user name is not blank. The name is returned as typed:
/// store keys match exactly, surrounding spaces included.
pub fn check_user(user: &str) -> Result<&str> {
    if user.trim().is_empty() {
        bail!("Name cannot be empty");
    }
    Ok(user)
}
