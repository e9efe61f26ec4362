//! Interest Recommender - keyword matching on declared interests
//!
//! ## Algorithm
//! 1. Each interest keyword scores one point for a course if it occurs in
//!    the course name or category (case-insensitive substring match)
//! 2. Courses with no matching keyword are dropped
//! 3. The rest are sorted by score, catalog order breaking ties
//!
//! Lower-cased names and categories are computed once at construction.

use crate::types::{Recommendation, RecommendationSource, names};
use data_loader::{Catalog, Course, InterestStore};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Trim and lower-case each keyword, keeping order.
///
/// Empty keywords are kept; filtering them is the caller's job.
pub fn normalize_interests<I, S>(interests: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    interests
        .into_iter()
        .map(|interest| interest.as_ref().trim().to_lowercase())
        .collect()
}

/// Lower-cased match fields of one catalog course, by catalog position
#[derive(Debug, Clone)]
struct SearchFields {
    name: String,
    category: String,
}

impl SearchFields {
    fn new(course: &Course) -> Self {
        Self {
            name: course.name.to_lowercase(),
            category: course.category.to_lowercase(),
        }
    }

    /// Number of keywords found in the name or the category
    fn matches(&self, interests: &[String]) -> usize {
        interests
            .iter()
            .filter(|keyword| self.name.contains(keyword.as_str()) || self.category.contains(keyword.as_str()))
            .count()
    }
}

/// Interest-based recommender over its own copy of the interest store
#[derive(Debug, Clone)]
pub struct InterestRecommender {
    catalog: Arc<Catalog>,

    /// Parallel to `catalog.courses()`
    search_fields: Vec<SearchFields>,

    /// user -> normalized keywords
    interests: InterestStore,
}

impl InterestRecommender {
    /// Create a recommender over a snapshot of `interests`.
    ///
    /// Stored keywords are normalized here too, so hand-edited store files
    /// behave the same as interests set through `set_interests`.
    pub fn new(catalog: Arc<Catalog>, interests: InterestStore) -> Self {
        let search_fields = catalog.iter().map(SearchFields::new).collect();
        let interests = interests
            .into_iter()
            .map(|(user, keywords)| (user, normalize_interests(keywords)))
            .collect();

        Self {
            catalog,
            search_fields,
            interests,
        }
    }

    /// Replace a user's interests with the normalized `interests`
    pub fn set_interests<I, S>(&mut self, user: &str, interests: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests
            .insert(user.to_string(), normalize_interests(interests));
    }

    /// The current interest store, for persisting
    pub fn interests(&self) -> &InterestStore {
        &self.interests
    }

    pub fn into_interests(self) -> InterestStore {
        self.interests
    }

    pub fn user_interests(&self, user: &str) -> Option<&[String]> {
        self.interests.get(user).map(|v| v.as_slice())
    }

    /// Top `top_n` course names matching `user`'s interests
    pub fn recommend_by_interest(&self, user: &str, top_n: usize) -> Vec<String> {
        names(self.recommend_by_interest_scored(user, top_n))
    }

    /// Top `top_n` matching courses, scored by matched keyword count
    #[instrument(skip(self))]
    pub fn recommend_by_interest_scored(&self, user: &str, top_n: usize) -> Vec<Recommendation> {
        let interests = match self.interests.get(user) {
            Some(interests) if !interests.is_empty() => interests,
            _ => {
                debug!("No interests for {:?}", user);
                return Vec::new();
            }
        };

        let mut scored: Vec<(&Course, usize)> = self
            .catalog
            .iter()
            .zip(&self.search_fields)
            .map(|(course, fields)| (course, fields.matches(interests)))
            .filter(|&(_, score)| score > 0)
            .collect();

        // Stable: equal scores stay in catalog order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(top_n);

        debug!("Generated {} interest-based recommendations", scored.len());
        scored
            .into_iter()
            .map(|(course, score)| {
                Recommendation::new(course, score as f64, RecommendationSource::Interests)
            })
            .collect()
    }
}
