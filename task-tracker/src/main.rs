use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use task_tracker::ops;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Track tasks in a flat JSON file")]
struct Cli {
    /// Path to the task file.
    #[arg(long, default_value = "tasks.json")]
    path: PathBuf,

    /// Add a new task in the format 'description,start,deadline'.
    #[arg(long = "add_task")]
    add_task: Option<String>,

    /// Print all tasks.
    #[arg(long)]
    show: bool,

    /// Delete ALL tasks with this exact description.
    #[arg(long)]
    del: Option<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays the report channel.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    if let Some(raw) = cli.add_task.as_deref().filter(|raw| !raw.is_empty()) {
        if let Err(err) = ops::add_task(&cli.path, raw) {
            eprintln!("Error adding task: {err}");
            return ExitCode::FAILURE;
        }
        println!("Task added!");
    }

    if cli.show {
        match ops::list_tasks(&cli.path) {
            Ok(report) => print!("{report}"),
            Err(err) => {
                eprintln!("Error showing tasks: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(desc) = cli.del.as_deref().filter(|desc| !desc.is_empty()) {
        if let Err(err) = ops::delete_task(&cli.path, desc) {
            eprintln!("Error while deleting task '{desc}': {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
