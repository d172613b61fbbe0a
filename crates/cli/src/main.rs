//! coursetrack CLI - course progress from the terminal.
//!
//! Stands in for the web presentation layer: loads a learner's progress,
//! applies score and completion actions, and renders the gating state the
//! UI would.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coursetrack_content::{extract_video_id, phase_views, Course};
use coursetrack_core::{CourseId, LearnerId, PhaseKind, ScoreField};
use coursetrack_progress::{CourseProgressEngine, ProgressReport, SaveStatus};
use coursetrack_services::{LearnerProfile, Notification, Role, Session};
use coursetrack_storage::JsonFileStore;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coursetrack")]
#[command(about = "Course progress tracker", long_about = None)]
struct Cli {
    /// Directory holding progress records
    #[arg(long, default_value = ".coursetrack")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a learner's progress through a course
    Show {
        /// Course ID
        #[arg(long)]
        course: CourseId,
        /// Learner ID
        #[arg(long)]
        learner: LearnerId,
    },
    /// Set a score field (replaces the previous value)
    Score {
        /// Course ID
        #[arg(long)]
        course: CourseId,
        /// Learner ID
        #[arg(long)]
        learner: LearnerId,
        /// Field name (lesson1Activity, midterm, lesson2Activity, final, gamePoints)
        field: String,
        /// New value
        value: f64,
    },
    /// Add claimed mini-game bonus points
    Bonus {
        /// Course ID
        #[arg(long)]
        course: CourseId,
        /// Learner ID
        #[arg(long)]
        learner: LearnerId,
        /// Points to add
        points: f64,
    },
    /// Mark a phase done and advance
    Complete {
        /// Course ID
        #[arg(long)]
        course: CourseId,
        /// Learner ID
        #[arg(long)]
        learner: LearnerId,
        /// Phase index (0-4)
        phase: usize,
    },
    /// Jump to a phase and show its gating state
    Goto {
        /// Course ID
        #[arg(long)]
        course: CourseId,
        /// Learner ID
        #[arg(long)]
        learner: LearnerId,
        /// Phase index (clamped to 0-4)
        phase: usize,
    },
    /// Print the phase outline of an authored course file
    Outline {
        /// Course JSON file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { course, learner } => {
            let engine = open_engine(&cli.data_dir, course, learner).await?;
            print_report(&ProgressReport::for_state(engine.state()));
        }
        Commands::Score {
            course,
            learner,
            field,
            value,
        } => {
            let field: ScoreField = field.parse()?;
            let session = start_session(learner);
            let mut engine = open_engine(&cli.data_dir, course, learner).await?;
            let save = engine.set_score(field, value).await?;
            report_save(&session, course, save);
            println!("{} = {}", field, engine.state().scores.get(field));
            session.logout();
        }
        Commands::Bonus {
            course,
            learner,
            points,
        } => {
            let session = start_session(learner);
            let mut engine = open_engine(&cli.data_dir, course, learner).await?;
            let save = engine.add_game_points(points).await?;
            report_save(&session, course, save);
            println!("gamePoints = {}", engine.state().scores.game_points);
            session.logout();
        }
        Commands::Complete {
            course,
            learner,
            phase,
        } => {
            let session = start_session(learner);
            let mut engine = open_engine(&cli.data_dir, course, learner).await?;
            let advance = engine.complete_phase(phase).await?;
            report_save(&session, course, advance.save);
            if advance.course_complete {
                println!("Congratulations! You completed the course!");
            } else {
                println!("Phase {} done, continuing to phase {}", phase, advance.next_phase);
            }
            session.logout();
        }
        Commands::Goto {
            course,
            learner,
            phase,
        } => {
            let mut engine = open_engine(&cli.data_dir, course, learner).await?;
            let landed = engine.navigate_to(phase);
            let passed = engine.is_phase_passed(landed)?;
            println!(
                "On phase {} ({}); continue {}",
                landed,
                if passed { "passed" } else { "not passed" },
                if engine.can_continue() { "enabled" } else { "disabled" },
            );
        }
        Commands::Outline { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let course: Course =
                serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;
            print_outline(&course);
        }
    }

    Ok(())
}

async fn open_engine(
    data_dir: &PathBuf,
    course: CourseId,
    learner: LearnerId,
) -> Result<CourseProgressEngine<JsonFileStore>> {
    let store = JsonFileStore::new(data_dir).await?;
    Ok(CourseProgressEngine::load(Arc::new(Mutex::new(store)), course, learner).await)
}

fn start_session(learner: LearnerId) -> Session {
    Session::start(LearnerProfile {
        id: learner,
        name: String::new(),
        role: Role::Student,
    })
}

/// Surface the write-through outcome the way the UI would: a non-blocking
/// warning, never a failure.
fn report_save(session: &Session, course: CourseId, save: SaveStatus) {
    let saved = save == SaveStatus::Saved;
    let _ = session
        .hub()
        .publish(Notification::ProgressSaved { course, saved });
    if !saved {
        eprintln!("warning: progress not saved; changes apply this session but may not survive a reload");
    }
}

fn print_report(report: &ProgressReport) {
    println!(
        "Progress: {}/{}{}",
        report.completed_count,
        report.phase_count,
        if report.course_complete { " (course complete)" } else { "" },
    );
    for phase in &report.phases {
        let mark = if phase.completed { "x" } else { " " };
        let score = match (phase.effective_score, phase.passing_score) {
            (Some(score), Some(passing)) => format!(" {:>5.1} / pass {}", score, passing),
            _ => String::new(),
        };
        println!(
            "  [{}] {} {:<12} {}{}",
            mark,
            phase.index,
            phase.title,
            if phase.passed { "passed" } else { "not passed" },
            score,
        );
    }
}

fn print_outline(course: &Course) {
    println!("{} - {}", course.title, course.description);
    for view in phase_views(course) {
        let kind = match view.kind {
            PhaseKind::Introduction => "intro",
            PhaseKind::Lesson => "lesson",
            PhaseKind::Exam => "exam",
        };
        print!("  {} {:<12} [{}]", view.index, view.title, kind);
        if let Some(activity) = &view.activity {
            print!(" activity: pass {}/{}", activity.passing_score, activity.max_score);
        }
        if let Some(url) = &view.video_url {
            match extract_video_id(url) {
                Some(id) => print!(" video: {}", id),
                None => print!(" video: (unrecognized url)"),
            }
        }
        println!();
    }
}
