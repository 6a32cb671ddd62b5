//! Command-line interface for the MyWay planner.
//!
//! # Responsibility
//! - Map subcommands onto core repositories, the dashboard service, and
//!   the countdown engine.
//! - Keep output line-oriented and deterministic.

use clap::{Parser, Subcommand, ValueEnum};
use myway_core::{
    default_log_level, init_logging, open_store, ClassDraft, ClassTime, Clock, DashboardService,
    KeyValueStore, Modality, PomodoroEngine, ProfileRepository, ScheduleRepository, SqliteStore,
    SystemClock, TaskRepository, TimerHost, TimerPhase, TimerSnapshot, Weekday,
};
use std::cell::Cell;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// Poll interval for `timer watch`.
const WATCH_TICK_MS: u64 = 200;

#[derive(Parser)]
#[command(name = "myway")]
#[command(about = "Student planner: tasks, weekly schedule, pomodoro timer")]
#[command(version)]
struct Cli {
    /// Path to the planner database.
    #[arg(long, global = true, env = "MYWAY_DB", default_value = "myway.db")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long, global = true, env = "MYWAY_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true, env = "MYWAY_LOG_LEVEL", default_value_t = default_log_level().to_string())]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the to-do list.
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
    /// Manage the weekly class schedule.
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
    /// Control the pomodoro countdown.
    Timer {
        #[command(subcommand)]
        command: TimerCommand,
    },
    /// Manage the profile image.
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Show the home-screen overview.
    Dashboard {
        /// Weekday to show classes for; defaults to today (UTC).
        #[arg(long)]
        day: Option<String>,
    },
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Add a task.
    Add { text: String },
    /// List all tasks.
    List,
    /// Flip a task between open and done.
    Toggle { id: String },
    /// Delete a task.
    Delete { id: String },
    /// Delete all tasks.
    Clear,
}

#[derive(Subcommand)]
enum ScheduleCommand {
    /// Add a class to one weekday.
    Add {
        day: String,
        course: String,
        /// Start time as HH:MM (24-hour).
        start: String,
        /// End time as HH:MM (24-hour).
        end: String,
        #[arg(long, value_enum, default_value_t = ModalityArg::Online)]
        modality: ModalityArg,
    },
    /// List classes for one weekday, or the whole week.
    List { day: Option<String> },
    /// Delete a class from one weekday.
    Delete { day: String, id: String },
    /// Delete every class on every weekday.
    Clear,
}

#[derive(Subcommand)]
enum TimerCommand {
    /// Start or resume the countdown.
    Start,
    /// Pause the countdown, keeping the remaining time.
    Stop,
    /// Stop and restore the full session length.
    Reset,
    /// Show the current countdown state.
    Status,
    /// Follow the countdown live until it stops.
    Watch,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Store a profile image as a data URL.
    Set { data_url: String },
    /// Print the stored profile image data URL.
    Show,
    /// Remove the stored profile image.
    Clear,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModalityArg {
    Online,
    InPerson,
}

impl From<ModalityArg> for Modality {
    fn from(value: ModalityArg) -> Self {
        match value {
            ModalityArg::Online => Modality::Online,
            ModalityArg::InPerson => Modality::InPerson,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)?;
    }

    let store = open_store(&cli.db)?;

    match cli.command {
        Command::Task { command } => run_task(&store, command),
        Command::Schedule { command } => run_schedule(&store, command),
        Command::Timer { command } => run_timer(&store, command),
        Command::Profile { command } => run_profile(&store, command),
        Command::Dashboard { day } => show_dashboard(&store, day),
    }
}

fn run_task(store: &SqliteStore, command: TaskCommand) -> Result<(), Box<dyn Error>> {
    let repo = TaskRepository::new(store);

    match command {
        TaskCommand::Add { text } => match repo.add(text)? {
            Some(task) => println!("added {}", task.id),
            None => return Err("task text cannot be empty".into()),
        },
        TaskCommand::List => {
            let tasks = repo.list()?;
            if tasks.is_empty() {
                println!("no tasks");
            }
            for task in &tasks {
                println!("{} {}  {}", checkbox(task.completed), task.id, task.text);
            }
        }
        TaskCommand::Toggle { id } => {
            let task = repo.toggle(parse_id(&id)?)?;
            println!("{} {}", checkbox(task.completed), task.text);
        }
        TaskCommand::Delete { id } => {
            repo.delete(parse_id(&id)?)?;
            println!("deleted");
        }
        TaskCommand::Clear => {
            repo.clear()?;
            println!("cleared");
        }
    }

    Ok(())
}

fn run_schedule(store: &SqliteStore, command: ScheduleCommand) -> Result<(), Box<dyn Error>> {
    let repo = ScheduleRepository::new(store);

    match command {
        ScheduleCommand::Add {
            day,
            course,
            start,
            end,
            modality,
        } => {
            let day = parse_weekday(&day)?;
            let draft = ClassDraft {
                course,
                start_time: parse_class_time(&start)?,
                end_time: parse_class_time(&end)?,
                modality: modality.into(),
            };
            match repo.add_class(day, &draft)? {
                Some(entry) => println!("added {} on {day}", entry.id),
                None => return Err("course name cannot be empty".into()),
            }
        }
        ScheduleCommand::List { day } => match day {
            Some(raw) => print_day_classes(&repo, parse_weekday(&raw)?, false)?,
            None => {
                for day in Weekday::ALL {
                    print_day_classes(&repo, day, true)?;
                }
            }
        },
        ScheduleCommand::Delete { day, id } => {
            repo.delete_class(parse_weekday(&day)?, parse_id(&id)?)?;
            println!("deleted");
        }
        ScheduleCommand::Clear => {
            repo.clear_all_days()?;
            println!("cleared");
        }
    }

    Ok(())
}

fn run_timer(store: &SqliteStore, command: TimerCommand) -> Result<(), Box<dyn Error>> {
    if let TimerCommand::Watch = command {
        return watch_timer(store);
    }

    let host = TermHost::default();
    let engine = PomodoroEngine::new(store, SystemClock, &host);

    let snapshot = match command {
        TimerCommand::Start => engine.start()?,
        TimerCommand::Stop => engine.stop()?,
        TimerCommand::Reset => engine.reset()?,
        TimerCommand::Status | TimerCommand::Watch => engine.resume()?,
    };

    println!("{} {}", phase_label(&snapshot), snapshot.display());
    Ok(())
}

fn watch_timer(store: &SqliteStore) -> Result<(), Box<dyn Error>> {
    let host = TermHost::default();
    let engine = PomodoroEngine::new(store, SystemClock, &host);

    let mut snapshot = engine.resume()?;
    loop {
        print!("\r{} {}  ", phase_label(&snapshot), snapshot.display());
        io::stdout().flush()?;
        if !host.pending.get() {
            break;
        }
        thread::sleep(Duration::from_millis(WATCH_TICK_MS));
        snapshot = engine.tick()?;
    }
    println!();
    Ok(())
}

fn run_profile(store: &SqliteStore, command: ProfileCommand) -> Result<(), Box<dyn Error>> {
    let repo = ProfileRepository::new(store);

    match command {
        ProfileCommand::Set { data_url } => {
            repo.set_image(data_url)?;
            println!("profile image saved");
        }
        ProfileCommand::Show => match repo.image()? {
            Some(image) => println!("{image}"),
            None => println!("no profile image"),
        },
        ProfileCommand::Clear => {
            repo.clear_image()?;
            println!("cleared");
        }
    }

    Ok(())
}

fn show_dashboard(store: &SqliteStore, day: Option<String>) -> Result<(), Box<dyn Error>> {
    let today = match day {
        Some(raw) => parse_weekday(&raw)?,
        None => Weekday::from_epoch_ms(SystemClock.now_ms()),
    };

    let overview = DashboardService::new(store).overview(today)?;

    println!(
        "Tasks: {}/{} done ({}%)",
        overview.completed_tasks, overview.total_tasks, overview.completion_percent
    );
    for task in &overview.preview {
        println!("  {} {}", checkbox(task.completed), task.text);
    }

    println!("{today}'s classes:");
    if overview.today_classes.is_empty() {
        println!("  none");
    }
    for class in &overview.today_classes {
        println!(
            "  {}-{}  {} ({})",
            class.start_time, class.end_time, class.course, class.modality
        );
    }

    println!(
        "Profile image: {}",
        if overview.profile_image.is_some() {
            "set"
        } else {
            "not set"
        }
    );
    Ok(())
}

fn print_day_classes<S: KeyValueStore>(
    repo: &ScheduleRepository<'_, S>,
    day: Weekday,
    skip_empty: bool,
) -> Result<(), Box<dyn Error>> {
    let entries = repo.list_day_sorted(day)?;
    if entries.is_empty() {
        if !skip_empty {
            println!("{day}: no classes");
        }
        return Ok(());
    }

    println!("{day}:");
    for entry in &entries {
        println!(
            "  {}-{}  {} ({})  {}",
            entry.start_time, entry.end_time, entry.course, entry.modality, entry.id
        );
    }
    Ok(())
}

/// Host that tracks whether the engine still wants ticks and surfaces
/// expiry on the terminal.
#[derive(Default)]
struct TermHost {
    pending: Cell<bool>,
}

impl TimerHost for TermHost {
    fn request_frame(&self) {
        self.pending.set(true);
    }

    fn cancel_frame(&self) {
        self.pending.set(false);
    }

    fn times_up(&self) {
        println!("\nTime's up!");
    }
}

fn phase_label(snapshot: &TimerSnapshot) -> &'static str {
    match snapshot.phase {
        TimerPhase::Running => "running",
        TimerPhase::Idle => "idle",
    }
}

fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

fn parse_weekday(raw: &str) -> Result<Weekday, Box<dyn Error>> {
    Weekday::parse(raw)
        .ok_or_else(|| format!("unknown weekday `{raw}`; expected Sunday through Saturday").into())
}

fn parse_class_time(raw: &str) -> Result<ClassTime, Box<dyn Error>> {
    ClassTime::parse(raw)
        .ok_or_else(|| format!("invalid time `{raw}`; expected HH:MM in 24-hour form").into())
}

fn parse_id(raw: &str) -> Result<Uuid, Box<dyn Error>> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid id `{raw}`").into())
}
