//! Result types shared by both recommenders.

use data_loader::{Course, CourseId};
use std::fmt;

/// Which recommender produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendationSource {
    /// Collaborative filtering over ratings
    Ratings,
    /// Keyword matching over interests
    Interests,
}

impl fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationSource::Ratings => write!(f, "ratings"),
            RecommendationSource::Interests => write!(f, "interests"),
        }
    }
}

/// A ranked course together with the score that ranked it
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub course_id: CourseId,
    pub name: String,
    pub category: String,
    /// Similarity-weighted sum for `Ratings`, matched keyword count for
    /// `Interests`
    pub score: f64,
    pub source: RecommendationSource,
}

impl Recommendation {
    pub fn new(course: &Course, score: f64, source: RecommendationSource) -> Self {
        Self {
            course_id: course.id.clone(),
            name: course.name.clone(),
            category: course.category.clone(),
            score,
            source,
        }
    }
}

/// Strip scores, keeping only the course names in rank order
pub fn names(recommendations: Vec<Recommendation>) -> Vec<String> {
    recommendations.into_iter().map(|r| r.name).collect()
}
