//! Collaborative Recommender - user-user collaborative filtering
//!
//! "Users who rate like you also rated these courses"
//!
//! ## Algorithm
//! 1. Compute cosine similarity between the target user and every other user
//!    who has rated something
//! 2. For every course the target has not rated, sum
//!    `similarity(target, other) * other's rating` over all other users
//! 3. Sort by that score (descending) and keep the top N
//! 4. Resolve ids to course names; ids missing from the catalog are skipped
//!
//! Everything is recomputed on each call; nothing is cached between calls.

use crate::similarity::cosine_similarity;
use crate::types::{Recommendation, RecommendationSource, names};
use data_loader::{Catalog, CourseId, RatingStore, RatingValue, UserRatings};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Rating-based recommender over its own copy of the rating store
#[derive(Debug, Clone)]
pub struct CollaborativeRecommender {
    /// Shared, read-only catalog used to resolve ids to names
    catalog: Arc<Catalog>,

    /// user -> course id -> rating
    ratings: RatingStore,
}

impl CollaborativeRecommender {
    /// Create a recommender over a snapshot of `ratings`
    pub fn new(catalog: Arc<Catalog>, ratings: RatingStore) -> Self {
        Self { catalog, ratings }
    }

    /// Add or overwrite a user's rating for a course.
    ///
    /// The id is stored in its string form; the value is stored as given.
    pub fn add_rating(&mut self, user: &str, course_id: impl ToString, rating: RatingValue) {
        self.ratings
            .entry(user.to_string())
            .or_default()
            .insert(course_id.to_string(), rating);
    }

    /// The current rating store, for persisting
    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    pub fn into_ratings(self) -> RatingStore {
        self.ratings
    }

    /// Ratings of a single user, if they have any entry at all
    pub fn user_ratings(&self, user: &str) -> Option<&UserRatings> {
        self.ratings.get(user)
    }

    /// Top `top_n` course names for `user`
    pub fn recommend(&self, user: &str, top_n: usize) -> Vec<String> {
        names(self.recommend_scored(user, top_n))
    }

    /// Top `top_n` courses for `user`, with their accumulated scores
    ///
    /// Empty when the user has no ratings or nobody else has rated anything.
    #[instrument(skip(self))]
    pub fn recommend_scored(&self, user: &str, top_n: usize) -> Vec<Recommendation> {
        let target = match self.ratings.get(user) {
            Some(target) if !target.is_empty() => target,
            _ => {
                debug!("No ratings for {:?}", user);
                return Vec::new();
            }
        };

        // Step 1: Similarity with every other rated user
        let similarities = self.similarities(user, target);
        debug!("Compared against {} other users", similarities.len());
        if similarities.is_empty() {
            return Vec::new();
        }

        // Step 2: Score courses the target has not rated yet
        let mut scores = self.candidate_scores(target, &similarities);

        // Step 3: Stable sort keeps accumulation order among equal scores
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        scores.truncate(top_n);

        // Step 4: Resolve ids, dropping any the catalog doesn't know
        let recommendations: Vec<Recommendation> = scores
            .into_iter()
            .filter_map(|(course_id, score)| match self.catalog.get_course(&course_id) {
                Some(course) => Some(Recommendation::new(
                    course,
                    score,
                    RecommendationSource::Ratings,
                )),
                None => {
                    warn!("Course ID {} not found in catalog", course_id);
                    None
                }
            })
            .collect();

        debug!("Generated {} rating-based recommendations", recommendations.len());
        recommendations
    }

    /// Cosine similarity between `target` and every other user with ratings,
    /// in store order
    fn similarities<'a>(&'a self, user: &str, target: &UserRatings) -> Vec<(&'a UserRatings, f64)> {
        let others: Vec<&UserRatings> = self
            .ratings
            .iter()
            .filter(|(other, ratings)| other.as_str() != user && !ratings.is_empty())
            .map(|(_, ratings)| ratings)
            .collect();

        // Indexed parallel collect keeps the input order
        others
            .into_par_iter()
            .map(|ratings| (ratings, cosine_similarity(target, ratings)))
            .collect()
    }

    /// Similarity-weighted rating sums for every course `target` hasn't rated.
    ///
    /// Returned in the order each course was first seen.
    fn candidate_scores(
        &self,
        target: &UserRatings,
        similarities: &[(&UserRatings, f64)],
    ) -> Vec<(CourseId, f64)> {
        let mut scores: Vec<(CourseId, f64)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for &(ratings, similarity) in similarities {
            for (course_id, rating) in ratings {
                if target.contains_key(course_id) {
                    continue;
                }
                let position = *positions.entry(course_id.as_str()).or_insert_with(|| {
                    scores.push((course_id.clone(), 0.0));
                    scores.len() - 1
                });
                scores[position].1 += similarity * rating;
            }
        }

        scores
    }
}
