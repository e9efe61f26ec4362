//! Interactive console menu.
//!
//! Reads choices line by line, so it runs the same against a terminal or a
//! scripted input. Every rating or interest change is saved straight away.

use crate::input;
use crate::render;
use anyhow::Result;
use colored::Colorize;
use session::Session;
use sources::DEFAULT_TOP_N;
use std::io::{BufRead, Write};

/// Read one line from `lines` after printing `label`; `None` at end of input
fn prompt<R: BufRead, W: Write>(lines: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if lines.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "--- Course Recommendation System ---".cyan().bold())?;
    writeln!(out, "1. Rate a course")?;
    writeln!(out, "2. Get recommendations (ratings)")?;
    writeln!(out, "3. Set interests")?;
    writeln!(out, "4. Get recommendations (interests)")?;
    writeln!(out, "5. List courses")?;
    writeln!(out, "6. Exit")?;
    Ok(())
}

/// Run the menu until the user exits or input ends
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut lines: R, out: &mut W) -> Result<()> {
    loop {
        print_menu(out)?;
        let Some(choice) = prompt(&mut lines, out, &"Choose an option: ".yellow().to_string())? else {
            break;
        };

        let outcome = match choice.trim() {
            "1" => rate_course(session, &mut lines, out),
            "2" => show_rating_recommendations(session, &mut lines, out),
            "3" => set_interests(session, &mut lines, out),
            "4" => show_interest_recommendations(session, &mut lines, out),
            "5" => render::courses(out, session.catalog()).map_err(Into::into),
            "6" => {
                writeln!(out, "{}", "Goodbye!".cyan())?;
                return Ok(());
            }
            _ => {
                writeln!(out, "{}", "Invalid option.".red())?;
                Ok(())
            }
        };

        // Bad input is reported and the menu continues
        if let Err(e) = outcome {
            writeln!(out, "{}", e.to_string().red())?;
        }
    }
    Ok(())
}

fn ask_user<R: BufRead, W: Write>(lines: &mut R, out: &mut W) -> Result<Option<String>> {
    match prompt(lines, out, "Enter your name: ")? {
        Some(user) => Ok(Some(input::check_user(&user)?.to_string())),
        None => Ok(None),
    }
}

fn rate_course<R: BufRead, W: Write>(session: &mut Session, lines: &mut R, out: &mut W) -> Result<()> {
    let Some(user) = ask_user(lines, out)? else {
        return Ok(());
    };
    render::courses(out, session.catalog())?;

    let Some(course_id) = prompt(lines, out, "Enter course ID to rate: ")? else {
        return Ok(());
    };
    let course_id = input::check_course(session.catalog(), &course_id)?.to_string();

    let Some(rating) = prompt(lines, out, "Enter rating (1-5): ")? else {
        return Ok(());
    };
    let rating = input::parse_rating(&rating)?;

    session.rate(&user, &course_id, rating);
    session.save_ratings()?;
    writeln!(out, "{}", "Rating saved!".green())?;
    Ok(())
}

fn show_rating_recommendations<R: BufRead, W: Write>(
    session: &Session,
    lines: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(user) = ask_user(lines, out)? else {
        return Ok(());
    };
    let recs = session.recommend_by_ratings(&user, DEFAULT_TOP_N);
    render::recommendations(
        out,
        "Recommended Courses (Based on Ratings):",
        &recs,
        false,
        "No recommendations yet. Rate more courses first!",
    )?;
    Ok(())
}

fn set_interests<R: BufRead, W: Write>(session: &mut Session, lines: &mut R, out: &mut W) -> Result<()> {
    let Some(user) = ask_user(lines, out)? else {
        return Ok(());
    };
    let Some(raw) = prompt(lines, out, "Enter your interests (comma separated): ")? else {
        return Ok(());
    };

    let stored = session.set_interests(&user, &raw);
    session.save_interests()?;
    writeln!(out, "{} {}", "Interests saved:".green(), stored.join(", "))?;
    Ok(())
}

fn show_interest_recommendations<R: BufRead, W: Write>(
    session: &Session,
    lines: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(user) = ask_user(lines, out)? else {
        return Ok(());
    };
    let recs = session.recommend_by_interests(&user, DEFAULT_TOP_N);
    render::recommendations(
        out,
        "Recommended Courses (Based on Interests):",
        &recs,
        false,
        "No interests found. Please set your interests first.",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::DataPaths;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_session() -> (TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(
            dir.path().join("courses.csv"),
            dir.path().join("user_ratings.json"),
            dir.path().join("user_interests.json"),
        );
        fs::write(
            &paths.courses,
            "course_id,course_name,category\n1,Intro to Python,Programming\n2,Data Viz,Data\n",
        )
        .unwrap();
        let session = Session::open(paths).unwrap();
        (dir, session)
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run(session, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rate_and_recommend() {
        let (_dir, mut session) = create_test_session();
        let script = "1\nalice\n1\n5\n1\nbob\n1\n4\n1\nbob\n2\n5\n2\nalice\n6\n";
        let text = run_script(&mut session, script);

        assert!(text.contains("Rating saved!"));
        assert!(text.contains("- Data Viz"));
        assert!(text.contains("Goodbye!"));
        assert!(session.paths().ratings.exists());
    }

    #[test]
    fn test_set_interests_and_recommend() {
        let (_dir, mut session) = create_test_session();
        let script = "3\ncarol\n Python, data ,\n4\ncarol\n6\n";
        let text = run_script(&mut session, script);

        assert!(text.contains("python, data"));
        assert!(text.contains("- Intro to Python"));
        assert!(text.contains("- Data Viz"));
        assert!(session.paths().interests.exists());
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let (_dir, mut session) = create_test_session();
        let text = run_script(&mut session, "1\nalice\n1\n9\n6\n");

        assert!(text.contains("Rating must be between 1 and 5"));
        assert!(session.by_rating().user_ratings("alice").is_none());
    }

    #[test]
    fn test_user_name_matches_exactly() {
        let (_dir, mut session) = create_test_session();
        let script = "1\n alice\n1\n5\n1\nbob\n1\n4\n1\nbob\n2\n5\n2\n alice\n6\n";
        let text = run_script(&mut session, script);

        assert!(text.contains("- Data Viz"));
        assert!(session.by_rating().user_ratings(" alice").is_some());
        assert!(session.by_rating().user_ratings("alice").is_none());
    }

    #[test]
    fn test_rejects_unknown_course() {
        let (_dir, mut session) = create_test_session();
        let text = run_script(&mut session, "1\nalice\n42\n6\n");

        assert!(text.contains("Course ID 42 not found in catalog"));
    }

    #[test]
    fn test_no_recommendations_message() {
        let (_dir, mut session) = create_test_session();
        let text = run_script(&mut session, "2\nnobody\n4\nnobody\n6\n");

        assert!(text.contains("No recommendations yet"));
        assert!(text.contains("No interests found"));
    }

    #[test]
    fn test_invalid_option_and_eof() {
        let (_dir, mut session) = create_test_session();
        let text = run_script(&mut session, "9\n");

        assert!(text.contains("Invalid option."));
        assert!(!text.contains("Goodbye!"));
    }
}
