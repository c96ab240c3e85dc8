//! # examdeck — terminal exam runner
//!
//! Students take a timed multiple-choice exam in the terminal; question
//! prompts may embed `$$...$$` math notation. On submission the result is
//! graded, saved, and reviewed by topic with remediation video links. A
//! separate dashboard mode aggregates stored results across students.
//!
//! ## Modes
//! - take an exam (default): `examdeck exam.json --student "Ada Lovelace"`
//! - admin dashboard TUI: `examdeck exam.json --dashboard`
//! - plain-text report: `examdeck exam.json --report`

mod core;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;

#[derive(Parser)]
#[command(
    version,
    about = "Terminal exam runner with math notation, topic review, and an admin dashboard"
)]
struct Args {
    /// Path to the exam definition (JSON)
    exam: PathBuf,

    /// Student name (required to take the exam)
    #[arg(short, long)]
    student: Option<String>,

    /// Student email
    #[arg(short, long)]
    email: Option<String>,

    /// Open the admin dashboard for this exam's stored results
    #[arg(short, long, conflicts_with_all = ["student", "email", "report"])]
    dashboard: bool,

    /// Print the aggregate results report to stdout and exit (no TUI)
    #[arg(short, long, conflicts_with_all = ["student", "email"])]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file (EXAMDECK_* overrides).
    dotenv().ok();

    // Initialize logging (warn level by default; use RUST_LOG=debug for verbose).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let args = Args::parse();
    let config = core::config::load();

    // Load and validate the exam up front (print user-friendly message; exit
    // uses Display not Debug).
    let exam = core::exam::load_exam(&args.exam).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if args.report {
        let results = core::results::load_results_for_exam(&exam.id)?;
        let stats = core::stats::aggregate(&results, &exam.questions);
        print!("{}", core::stats::format_report(&stats, &results));
        return Ok(());
    }

    if args.dashboard {
        let results = core::results::load_results_for_exam(&exam.id)?;
        let stats = core::stats::aggregate(&results, &exam.questions);
        let app = tui::App::for_dashboard(config, exam, tui::DashboardData { stats, results });
        tui::run(app)?;
        return Ok(());
    }

    let student = args.student.unwrap_or_else(|| {
        eprintln!("Error: --student is required to take an exam");
        std::process::exit(1);
    });
    let email = args.email.unwrap_or_default();

    let app = tui::App::for_exam(config, exam, student, email);
    tui::run(app)?;
    Ok(())
}
