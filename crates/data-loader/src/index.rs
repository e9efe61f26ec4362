//! Catalog and data set loading.
//!
//! `Catalog::load` turns the catalog file into an indexed `Catalog`;
//! `DataSet::load` reads the catalog and both stores in parallel.

use crate::error::Result;
use crate::parser;
use crate::store;
use crate::types::*;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the course catalog from a CSV file
    ///
    /// A missing file yields an empty catalog (with a warning) so a fresh
    /// install still starts; a file without the required columns is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Courses file not found: {}", path.display());
            return Ok(Catalog::new());
        }

        let courses = parser::parse_courses(path)?;
        let mut catalog = Catalog::new();
        for course in courses {
            let id = course.id.clone();
            if !catalog.insert_course(course) {
                warn!("Duplicate course id {:?} in {}; lookups use the first row", id, path.display());
            }
        }

        info!("Loaded {} courses from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

/// Everything a session starts from: the catalog plus both stores
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub catalog: Catalog,
    pub ratings: RatingStore,
    pub interests: InterestStore,
}

impl DataSet {
    /// Load the catalog and both stores
    ///
    /// The three files are independent, so they are read in parallel with
    /// nested `rayon::join`s.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let (catalog, (ratings, interests)) = rayon::join(
            || Catalog::load(&paths.courses),
            || {
                rayon::join(
                    || store::load_ratings(&paths.ratings),
                    || store::load_interests(&paths.interests),
                )
            },
        );

        Ok(Self {
            catalog: catalog?,
            ratings: ratings?,
            interests: interests?,
        })
    }
}
