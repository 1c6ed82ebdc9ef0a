use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(about = "Interactive to-do list manager", long_about = None)]
pub struct Cli {
    /// Task file to use, relative to the home directory
    pub database: Option<PathBuf>,

    /// Directory holding config.json and the task file (defaults to the program directory)
    #[arg(long, env = "TASKS_HOME")]
    pub home: Option<PathBuf>,

    /// Config file to read instead of <home>/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
