//! # Data Loader Crate
//!
//! This crate loads the course catalog and persists the two user stores.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Course, Catalog, RatingStore, InterestStore)
//! - **parser**: Parse the catalog CSV into `Course` records
//! - **index**: Build the `Catalog` and load a whole `DataSet`
//! - **store**: Load and save the JSON stores
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DataPaths, DataSet};
//!
//! let data = DataSet::load(&DataPaths::default())?;
//! let course = data.catalog.get_course("101").unwrap();
//! println!("{} ({})", course.name, course.category);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::DataSet;
pub use types::{
    // Type aliases
    CourseId,
    UserName,
    RatingValue,
    UserRatings,
    RatingStore,
    InterestStore,
    // Core types
    Course,
    Catalog,
    DataPaths,
};
