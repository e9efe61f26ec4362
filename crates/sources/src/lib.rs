//! # Sources Crate
//!
//! This crate implements the two course recommenders.
//!
//! ## Components
//!
//! ### Collaborative Recommender
//! User-user collaborative filtering on explicit ratings:
//! - "Users who rate like you also rated..."
//! - Cosine similarity over the union of rated courses
//!
//! ### Interest Recommender
//! Keyword matching on declared interests:
//! - One point per keyword found in a course's name or category
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CollaborativeRecommender, InterestRecommender, DEFAULT_TOP_N};
//! use data_loader::{DataPaths, DataSet};
//! use std::sync::Arc;
//!
//! let data = DataSet::load(&DataPaths::default())?;
//! let catalog = Arc::new(data.catalog);
//!
//! let mut by_rating = CollaborativeRecommender::new(catalog.clone(), data.ratings);
//! let mut by_interest = InterestRecommender::new(catalog.clone(), data.interests);
//!
//! by_rating.add_rating("alice", "101", 5.0);
//! by_interest.set_interests("alice", ["python", "data"]);
//!
//! let from_ratings = by_rating.recommend("alice", DEFAULT_TOP_N);
//! let from_interests = by_interest.recommend_by_interest("alice", DEFAULT_TOP_N);
//! ```
//!
//! Both recommenders own their store; read it back with `ratings()` /
//! `interests()` to persist changes.

pub mod types;
pub mod similarity;
pub mod collaborative;
pub mod interest;

// Re-export commonly used types
pub use types::{Recommendation, RecommendationSource};
pub use similarity::cosine_similarity;
pub use collaborative::CollaborativeRecommender;
pub use interest::{InterestRecommender, normalize_interests};

/// Number of recommendations returned when the caller doesn't say
pub const DEFAULT_TOP_N: usize = 3;
