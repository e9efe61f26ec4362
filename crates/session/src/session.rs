//! # Recommendation Session
//!
//! A `Session` is everything one run of the application works with:
//! 1. The catalog, loaded once and shared read-only
//! 2. The collaborative recommender, owning the rating store
//! 3. The interest recommender, owning the interest store
//! 4. The paths the stores are saved back to
//!
//! Mutations only touch memory. Nothing reaches disk until one of the
//! `save_*` methods is called, and saving always writes the store the
//! recommender holds, so the value on disk is the one that was just edited.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use data_loader::{Catalog, DataPaths, DataSet, RatingValue, store};
use sources::{CollaborativeRecommender, InterestRecommender, Recommendation};

/// Split a comma-separated interest string, dropping blank entries
pub fn parse_interest_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(str::to_string)
        .collect()
}

/// Catalog, both recommenders, and where to persist their stores
#[derive(Debug, Clone)]
pub struct Session {
    paths: DataPaths,
    catalog: Arc<Catalog>,
    by_rating: CollaborativeRecommender,
    by_interest: InterestRecommender,
}

impl Session {
    /// Load the catalog and both stores from `paths`
    pub fn open(paths: DataPaths) -> Result<Self> {
        let data = DataSet::load(&paths).context("Failed to load course data")?;
        info!(
            "Session ready: {} courses, {} rating users, {} interest users",
            data.catalog.len(),
            data.ratings.len(),
            data.interests.len()
        );
        Ok(Self::from_parts(paths, data))
    }

    /// Build a session from data that is already in memory
    pub fn from_parts(paths: DataPaths, data: DataSet) -> Self {
        let catalog = Arc::new(data.catalog);
        let by_rating = CollaborativeRecommender::new(catalog.clone(), data.ratings);
        let by_interest = InterestRecommender::new(catalog.clone(), data.interests);
        Self {
            paths,
            catalog,
            by_rating,
            by_interest,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn by_rating(&self) -> &CollaborativeRecommender {
        &self.by_rating
    }

    pub fn by_interest(&self) -> &InterestRecommender {
        &self.by_interest
    }

    /// Record a single rating. No range check happens here.
    pub fn rate(&mut self, user: &str, course_id: &str, rating: RatingValue) {
        debug!("{} rated {} as {}", user, course_id, rating);
        self.by_rating.add_rating(user, course_id, rating);
    }

    /// Record a batch of ratings where 0 means "not rated" and is skipped.
    ///
    /// Returns how many ratings were stored.
    pub fn rate_many<I, S>(&mut self, user: &str, ratings: I) -> usize
    where
        I: IntoIterator<Item = (S, RatingValue)>,
        S: AsRef<str>,
    {
        let mut stored = 0;
        for (course_id, rating) in ratings {
            if rating == 0.0 {
                continue;
            }
            self.rate(user, course_id.as_ref(), rating);
            stored += 1;
        }
        stored
    }

    pub fn recommend_by_ratings(&self, user: &str, top_n: usize) -> Vec<Recommendation> {
        self.by_rating.recommend_scored(user, top_n)
    }

    /// Replace a user's interests with the entries of a comma-separated list
    pub fn set_interests(&mut self, user: &str, raw: &str) -> Vec<String> {
        let interests = parse_interest_list(raw);
        self.by_interest.set_interests(user, &interests);
        self.by_interest
            .user_interests(user)
            .map(|stored| stored.to_vec())
            .unwrap_or_default()
    }

    pub fn recommend_by_interests(&self, user: &str, top_n: usize) -> Vec<Recommendation> {
        self.by_interest.recommend_by_interest_scored(user, top_n)
    }

    /// Write the rating store to its file
    pub fn save_ratings(&self) -> Result<()> {
        store::save_ratings(self.by_rating.ratings(), &self.paths.ratings)
            .with_context(|| format!("Failed to save ratings to {}", self.paths.ratings.display()))?;
        info!("Saved ratings to {}", self.paths.ratings.display());
        Ok(())
    }

    /// Write the interest store to its file
    pub fn save_interests(&self) -> Result<()> {
        store::save_interests(self.by_interest.interests(), &self.paths.interests)
            .with_context(|| {
                format!("Failed to save interests to {}", self.paths.interests.display())
            })?;
        info!("Saved interests to {}", self.paths.interests.display());
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_ratings()?;
        self.save_interests()
    }
}
