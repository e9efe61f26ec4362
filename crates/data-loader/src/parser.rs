//! Parser for the course catalog CSV.
//!
//! Format: a header row followed by one course per line, e.g.
//!
//! ```text
//! course_id,course_name,category
//! 101,Intro to Python,Programming
//! 102,"Statistics, Part 1",Math
//! ```
//!
//! Columns are located by header name, so their order is free and unknown
//! columns are ignored. `course_id` and `course_name` are required;
//! `category` is optional and defaults to an empty string.
//!
//! Quoting follows the usual CSV rules: a field wrapped in double quotes may
//! contain commas, and `""` inside it is a literal quote. Quoted fields may
//! not span lines.

use crate::error::{DataLoadError, Result};
use crate::types::Course;
use std::fs;
use std::path::Path;

pub const ID_COLUMN: &str = "course_id";
pub const NAME_COLUMN: &str = "course_name";
pub const CATEGORY_COLUMN: &str = "category";

/// Parse the catalog file at `path`
pub fn parse_courses(path: &Path) -> Result<Vec<Course>> {
    let content = fs::read_to_string(path)?;
    parse_courses_str(&content, &path.display().to_string())
}

/// Parse catalog text. `file` is only used in error messages.
pub fn parse_courses_str(content: &str, file: &str) -> Result<Vec<Course>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_line, header)) = lines.next() else {
        // An empty file has no header at all, so it cannot name the id column
        return Err(missing_column(file, ID_COLUMN));
    };

    let header: Vec<String> = split_fields(header, file, header_line)?
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect();

    let column = |name: &str| header.iter().position(|h| h == name);
    let id_col = column(ID_COLUMN).ok_or_else(|| missing_column(file, ID_COLUMN))?;
    let name_col = column(NAME_COLUMN).ok_or_else(|| missing_column(file, NAME_COLUMN))?;
    let category_col = column(CATEGORY_COLUMN);

    let mut courses = Vec::new();
    for (line_no, line) in lines {
        let fields = split_fields(line, file, line_no)?;
        if fields.len() != header.len() {
            return Err(DataLoadError::FieldCountMismatch {
                file: file.to_string(),
                expected: header.len(),
                found: fields.len(),
                line: line_no,
            });
        }

        let category = category_col
            .map(|col| fields[col].clone())
            .unwrap_or_default();
        courses.push(Course::new(
            fields[id_col].clone(),
            fields[name_col].clone(),
            category,
        ));
    }

    Ok(courses)
}

fn missing_column(file: &str, column: &str) -> DataLoadError {
    DataLoadError::MissingColumn {
        file: file.to_string(),
        column: column.to_string(),
    }
}

/// Split one CSV line into its fields, unquoting as we go
fn split_fields(line: &str, file: &str, line_no: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    // Set once a quoted section closes; only a separator may follow
    let mut after_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    after_quotes = true;
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            ',' => {
                fields.push(std::mem::take(&mut field));
                after_quotes = false;
            }
            '"' if field.is_empty() && !after_quotes => in_quotes = true,
            _ if after_quotes => {
                return Err(DataLoadError::ParseError {
                    file: file.to_string(),
                    line: line_no,
                    reason: format!("Unexpected '{}' after closing quote", c),
                });
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Unterminated quoted field".to_string(),
        });
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_catalog() {
        let csv = "course_id,course_name,category\n1,Intro to Python,Programming\n2,Data Viz,Data\n";
        let courses = parse_courses_str(csv, "courses.csv").unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0], Course::new("1", "Intro to Python", "Programming"));
        assert_eq!(courses[1], Course::new("2", "Data Viz", "Data"));
    }

    #[test]
    fn test_columns_located_by_header() {
        let csv = "category,level,course_name,course_id\nMath,1,Algebra,M1\n";
        let courses = parse_courses_str(csv, "courses.csv").unwrap();

        assert_eq!(courses, vec![Course::new("M1", "Algebra", "Math")]);
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "course_id,course_name,category\n7,\"Statistics, Part \"\"One\"\"\",Math\n";
        let courses = parse_courses_str(csv, "courses.csv").unwrap();

        assert_eq!(courses[0].name, "Statistics, Part \"One\"");
    }

    #[test]
    fn test_ids_stay_strings() {
        let csv = "course_id,course_name,category\n007,Bond Studies,Film\n";
        let courses = parse_courses_str(csv, "courses.csv").unwrap();

        assert_eq!(courses[0].id, "007");
    }

    #[test]
    fn test_bom_and_blank_lines() {
        let csv = "\u{feff}course_id,course_name,category\r\n\r\n1,Rust,Systems\r\n";
        let courses = parse_courses_str(csv, "courses.csv").unwrap();

        assert_eq!(courses, vec![Course::new("1", "Rust", "Systems")]);
    }

    #[test]
    fn test_category_optional() {
        let csv = "course_id,course_name\n1,Rust\n";
        let courses = parse_courses_str(csv, "courses.csv").unwrap();

        assert_eq!(courses[0].category, "");
    }

    #[test]
    fn test_missing_id_column_is_fatal() {
        let csv = "id,course_name,category\n1,Rust,Systems\n";
        let err = parse_courses_str(csv, "courses.csv").unwrap_err();

        assert!(matches!(
            err,
            DataLoadError::MissingColumn { ref column, .. } if column == ID_COLUMN
        ));
    }

    #[test]
    fn test_missing_name_column_is_fatal() {
        let csv = "course_id,category\n1,Systems\n";
        let err = parse_courses_str(csv, "courses.csv").unwrap_err();

        assert!(matches!(
            err,
            DataLoadError::MissingColumn { ref column, .. } if column == NAME_COLUMN
        ));
    }

    #[test]
    fn test_field_count_mismatch() {
        let csv = "course_id,course_name,category\n1,Rust\n";
        let err = parse_courses_str(csv, "courses.csv").unwrap_err();

        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 3, found: 2, line: 2, .. }
        ));
    }

    #[test]
    fn test_unterminated_quote() {
        let csv = "course_id,course_name,category\n1,\"Rust,Systems\n";
        let err = parse_courses_str(csv, "courses.csv").unwrap_err();

        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_split_fields_empty_values() {
        let fields = split_fields("a,,\"\"", "f", 1).unwrap();
        assert_eq!(fields, vec!["a", "", ""]);
    }
}
