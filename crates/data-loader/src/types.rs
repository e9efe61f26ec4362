//! Core domain types for the course catalog and the two user stores.
//!
//! Key decisions encoded here:
//! - Course ids and user names are plain strings, compared exactly.
//! - The catalog keeps file order, with a side index for O(1) lookups.
//! - Stores are `BTreeMap`s so iteration (and the JSON we write) is stable.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a course. Numeric-looking ids stay strings: "01" != "1".
pub type CourseId = String;

/// A user name, matched exactly ("Bob" and "bob" are different users)
pub type UserName = String;

/// A rating value. Range policy belongs to whoever collects the rating.
pub type RatingValue = f64;

/// One user's ratings, keyed by course id
pub type UserRatings = BTreeMap<CourseId, RatingValue>;

/// All ratings: user -> course id -> rating
pub type RatingStore = BTreeMap<UserName, UserRatings>;

/// All interests: user -> normalized keywords, in the order they were given
pub type InterestStore = BTreeMap<UserName, Vec<String>>;

// =============================================================================
// Course
// =============================================================================

/// A single recommendable course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub category: String,
}

impl Course {
    pub fn new(
        id: impl Into<CourseId>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, read-only collection of courses.
///
/// Duplicate ids are kept in `courses` (they still show up in linear scans),
/// but `get_course` always resolves to the first row carrying that id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) courses: Vec<Course>,
    /// First position of each id in `courses`
    pub(crate) id_index: HashMap<CourseId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from courses in the given order
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert_course(course);
        }
        catalog
    }

    /// Appends a course.
    ///
    /// Returns `false` when the id was already present; the new row is kept
    /// but lookups keep resolving to the earlier one.
    pub fn insert_course(&mut self, course: Course) -> bool {
        let position = self.courses.len();
        let is_new = !self.id_index.contains_key(&course.id);
        if is_new {
            self.id_index.insert(course.id.clone(), position);
        }
        self.courses.push(course);
        is_new
    }

    /// Get a course by id (first match wins)
    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.id_index.get(id).map(|&position| &self.courses[position])
    }

    /// Get a course name by id
    pub fn course_name(&self, id: &str) -> Option<&str> {
        self.get_course(id).map(|course| course.name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// All courses in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// File locations
// =============================================================================

/// Where the catalog and the two stores live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub courses: PathBuf,
    pub ratings: PathBuf,
    pub interests: PathBuf,
}

impl DataPaths {
    pub const DEFAULT_COURSES: &'static str = "data/courses.csv";
    pub const DEFAULT_RATINGS: &'static str = "data/user_ratings.json";
    pub const DEFAULT_INTERESTS: &'static str = "data/user_interests.json";

    pub fn new(
        courses: impl Into<PathBuf>,
        ratings: impl Into<PathBuf>,
        interests: impl Into<PathBuf>,
    ) -> Self {
        Self {
            courses: courses.into(),
            ratings: ratings.into(),
            interests: interests.into(),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_COURSES,
            Self::DEFAULT_RATINGS,
            Self::DEFAULT_INTERESTS,
        )
    }
}
