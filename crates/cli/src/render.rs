//! Console output for catalogs and recommendation lists.

use colored::Colorize;
use data_loader::Catalog;
use sources::Recommendation;
use std::io::{self, Write};

/// Print every course as `id. name (category)`
pub fn courses(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{}", "Available Courses:".bold().blue())?;
    if catalog.is_empty() {
        writeln!(out, "{}", "No courses loaded.".red())?;
    }
    for course in catalog {
        writeln!(out, "{}. {} ({})", course.id, course.name, course.category)?;
    }
    Ok(())
}

/// Print a ranked list under `heading`, or `empty_hint` when there is none
pub fn recommendations(
    out: &mut impl Write,
    heading: &str,
    recs: &[Recommendation],
    explain: bool,
    empty_hint: &str,
) -> io::Result<()> {
    if recs.is_empty() {
        writeln!(out, "{}", empty_hint.red())?;
        return Ok(());
    }

    writeln!(out, "{}", heading.green())?;
    for (rank, rec) in recs.iter().enumerate() {
        if explain {
            writeln!(
                out,
                "{}. {} [{}] - Score: {:.2} (from {}, id {})",
                (rank + 1).to_string().green(),
                rec.name,
                rec.category,
                rec.score,
                rec.source,
                rec.course_id
            )?;
        } else {
            writeln!(out, "- {}", rec.name)?;
        }
    }
    Ok(())
}
