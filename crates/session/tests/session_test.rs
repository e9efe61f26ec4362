//! Integration tests for the session.
//!
//! These tests go through real files: load a catalog and stores from disk,
//! mutate them through the session, save, and reopen.

use data_loader::DataPaths;
use session::Session;
use std::fs;
use tempfile::TempDir;

const COURSES_CSV: &str = "\
course_id,course_name,category
1,Intro to Python,Programming
2,Data Viz,Data
3,Machine Learning,Data
4,Web Design,Design
";

fn create_test_setup() -> (TempDir, DataPaths) {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();

    let paths = DataPaths::new(
        data_dir.join("courses.csv"),
        data_dir.join("user_ratings.json"),
        data_dir.join("user_interests.json"),
    );
    fs::write(&paths.courses, COURSES_CSV).unwrap();

    (dir, paths)
}

fn names(recs: Vec<sources::Recommendation>) -> Vec<String> {
    recs.into_iter().map(|r| r.name).collect()
}

#[test]
fn test_fresh_install_starts_empty() {
    let (_dir, paths) = create_test_setup();
    let session = Session::open(paths).unwrap();

    assert_eq!(session.catalog().len(), 4);
    assert!(session.by_rating().ratings().is_empty());
    assert!(session.by_interest().interests().is_empty());
    assert!(session.recommend_by_ratings("alice", 3).is_empty());
    assert!(session.recommend_by_interests("alice", 3).is_empty());
}

#[test]
fn test_missing_catalog_is_not_fatal() {
    let (_dir, paths) = create_test_setup();
    fs::remove_file(&paths.courses).unwrap();

    let session = Session::open(paths).unwrap();
    assert!(session.catalog().is_empty());
}

#[test]
fn test_catalog_without_id_column_is_fatal() {
    let (_dir, paths) = create_test_setup();
    fs::write(&paths.courses, "name,category\nRust,Systems\n").unwrap();

    let err = Session::open(paths).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("course_id"), "unexpected error: {}", message);
}

#[test]
fn test_ratings_persist_across_sessions() {
    let (_dir, paths) = create_test_setup();

    let mut session = Session::open(paths.clone()).unwrap();
    session.rate("alice", "1", 5.0);
    session.rate("bob", "1", 4.0);
    session.rate("bob", "2", 5.0);
    session.save_ratings().unwrap();

    let reopened = Session::open(paths).unwrap();
    assert_eq!(names(reopened.recommend_by_ratings("alice", 3)), vec!["Data Viz"]);
}

#[test]
fn test_interests_persist_across_sessions() {
    let (_dir, paths) = create_test_setup();

    let mut session = Session::open(paths.clone()).unwrap();
    session.set_interests("carol", "Python, DATA");
    session.save_interests().unwrap();

    let saved = fs::read_to_string(&paths.interests).unwrap();
    assert!(saved.contains("\"python\""));
    assert!(saved.contains("\"data\""));

    let reopened = Session::open(paths).unwrap();
    assert_eq!(
        reopened.by_interest().user_interests("carol").unwrap(),
        ["python", "data"]
    );
    assert_eq!(
        names(reopened.recommend_by_interests("carol", 2)),
        vec!["Intro to Python", "Data Viz"]
    );
}

#[test]
fn test_unsaved_changes_are_not_persisted() {
    let (_dir, paths) = create_test_setup();

    let mut session = Session::open(paths.clone()).unwrap();
    session.rate("alice", "1", 5.0);

    let reopened = Session::open(paths).unwrap();
    assert!(reopened.by_rating().user_ratings("alice").is_none());
}

#[test]
fn test_existing_store_files_are_used() {
    let (_dir, paths) = create_test_setup();
    fs::write(
        &paths.ratings,
        r#"{"alice": {"1": 5}, "bob": {"1": 4, "2": 5}, "zoe": {"99": 5}}"#,
    )
    .unwrap();

    let session = Session::open(paths).unwrap();
    let recs = session.recommend_by_ratings("alice", 3);

    // "99" is not in the catalog and is dropped; "2" is still returned
    assert_eq!(names(recs), vec!["Data Viz"]);
}

#[test]
fn test_save_writes_both_stores() {
    let (_dir, paths) = create_test_setup();

    let mut session = Session::open(paths.clone()).unwrap();
    let stored = session.rate_many("dana", [("1", 0.0), ("3", 4.0), ("4", 2.0)]);
    session.set_interests("dana", "design");
    session.save().unwrap();

    assert_eq!(stored, 2);
    let reopened = Session::open(paths).unwrap();
    let dana = reopened.by_rating().user_ratings("dana").unwrap();
    assert_eq!(dana.len(), 2);
    assert!(!dana.contains_key("1"));
    assert_eq!(
        names(reopened.recommend_by_interests("dana", 3)),
        vec!["Web Design"]
    );
}
