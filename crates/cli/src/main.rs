mod input;
mod menu;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataPaths, RatingValue};
use session::Session;
use sources::DEFAULT_TOP_N;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// CourseRecs - Course Recommendation Engine
#[derive(Parser)]
#[command(name = "course-recs")]
#[command(about = "Course recommendations from ratings and interests", long_about = None)]
struct Cli {
    /// Course catalog CSV (course_id, course_name, category)
    #[arg(long, default_value = DataPaths::DEFAULT_COURSES)]
    courses: PathBuf,

    /// Rating store JSON
    #[arg(long, default_value = DataPaths::DEFAULT_RATINGS)]
    ratings: PathBuf,

    /// Interest store JSON
    #[arg(long, default_value = DataPaths::DEFAULT_INTERESTS)]
    interests: PathBuf,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the course catalog
    Courses,

    /// Rate a course (1-5) and save the rating
    Rate {
        /// Your name
        #[arg(long)]
        user: String,

        /// Course ID to rate
        #[arg(long)]
        course: String,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: RatingValue,
    },

    /// Recommend courses based on ratings
    Recommend {
        /// User to get recommendations for
        #[arg(long)]
        user: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        limit: usize,

        /// Show scores and course ids
        #[arg(long)]
        explain: bool,
    },

    /// Show or replace a user's interests
    Interests {
        /// User whose interests to show or set
        #[arg(long)]
        user: String,

        /// Comma-separated interests replacing the current ones
        #[arg(long)]
        set: Option<String>,
    },

    /// Recommend courses based on interests
    Suggest {
        /// User to get recommendations for
        #[arg(long)]
        user: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        limit: usize,

        /// Show match counts and course ids
        #[arg(long)]
        explain: bool,
    },

    /// Interactive console menu
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let paths = DataPaths::new(cli.courses, cli.ratings, cli.interests);
    debug!("Using data files {:?}", paths);
    let mut session = Session::open(paths).context("Failed to start session")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Courses => render::courses(&mut io::stdout(), session.catalog())?,
        Commands::Rate {
            user,
            course,
            rating,
        } => handle_rate(&mut session, &user, &course, rating)?,
        Commands::Recommend {
            user,
            limit,
            explain,
        } => handle_recommend(&session, &user, limit, explain)?,
        Commands::Interests { user, set } => handle_interests(&mut session, &user, set)?,
        Commands::Suggest {
            user,
            limit,
            explain,
        } => handle_suggest(&session, &user, limit, explain)?,
        Commands::Menu => menu::run(&mut session, io::stdin().lock(), &mut io::stdout())?,
    }

    Ok(())
}

/// Handle the 'rate' command
fn handle_rate(session: &mut Session, user: &str, course: &str, rating: RatingValue) -> Result<()> {
    let user = input::check_user(user)?;
    let course = input::check_course(session.catalog(), course)?;
    let rating = input::check_rating(rating)?;

    session.rate(user, course, rating);
    session.save_ratings()?;
    println!("{} {} rated {} as {}", "✓".green(), user, course, rating);
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(session: &Session, user: &str, limit: usize, explain: bool) -> Result<()> {
    let user = input::check_user(user)?;
    let recs = session.recommend_by_ratings(user, limit);
    render::recommendations(
        &mut io::stdout(),
        "Recommended Courses (Based on Ratings):",
        &recs,
        explain,
        "No recommendations yet. Rate more courses first!",
    )?;
    Ok(())
}

/// Handle the 'interests' command
fn handle_interests(session: &mut Session, user: &str, set: Option<String>) -> Result<()> {
    let user = input::check_user(user)?;
    let Some(raw) = set else {
        match session.by_interest().user_interests(user) {
            Some(interests) if !interests.is_empty() => {
                println!("{} {}", format!("{}'s interests:", user).bold().blue(), interests.join(", "));
            }
            _ => println!("{}", format!("No interests set for {}", user).red()),
        }
        return Ok(());
    };

    let stored = session.set_interests(user, &raw);
    session.save_interests()?;
    println!("{} Interests saved: {}", "✓".green(), stored.join(", "));
    Ok(())
}

/// Handle the 'suggest' command
fn handle_suggest(session: &Session, user: &str, limit: usize, explain: bool) -> Result<()> {
    let user = input::check_user(user)?;
    let recs = session.recommend_by_interests(user, limit);
    render::recommendations(
        &mut io::stdout(),
        "Recommended Courses (Based on Interests):",
        &recs,
        explain,
        "No interests found. Please set your interests first.",
    )?;
    Ok(())
}
