//! JSON persistence for the rating and interest stores.
//!
//! Both stores are written as a single pretty-printed JSON object:
//!
//! ```json
//! {
//!     "alice": {
//!         "101": 5.0
//!     }
//! }
//! ```
//!
//! A store file that does not exist yet loads as an empty store. Writes go
//! through a temporary file in the same directory and are renamed into place,
//! so a failed save never leaves a half-written store behind.

use crate::error::{DataLoadError, Result};
use crate::types::{InterestStore, RatingStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Load a JSON document, or `T::default()` if the file does not exist
pub fn load_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        debug!("{} not found, starting empty", path.display());
        return Ok(T::default());
    }

    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|source| DataLoadError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Save `value` as pretty-printed JSON (4-space indent), creating parent
/// directories as needed
pub fn save_json<T>(value: &T, path: &Path) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        value
            .serialize(&mut serializer)
            .map_err(|source| DataLoadError::Json {
                path: path.display().to_string(),
                source,
            })?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Load the rating store (user -> course id -> rating)
pub fn load_ratings(path: &Path) -> Result<RatingStore> {
    let ratings: RatingStore = load_json(path)?;
    info!("Loaded ratings for {} users", ratings.len());
    Ok(ratings)
}

/// Load the interest store (user -> keywords)
pub fn load_interests(path: &Path) -> Result<InterestStore> {
    let interests: InterestStore = load_json(path)?;
    info!("Loaded interests for {} users", interests.len());
    Ok(interests)
}

pub fn save_ratings(ratings: &RatingStore, path: &Path) -> Result<()> {
    save_json(ratings, path)
}

pub fn save_interests(interests: &InterestStore, path: &Path) -> Result<()> {
    save_json(interests, path)
}
