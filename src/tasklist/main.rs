use clap::Parser;
use std::io::{self, BufReader};
use std::sync::mpsc;
use tasklist::api::TaskApi;
use tasklist::config::{AppConfig, AppPaths};
use tasklist::session::{spawn_line_reader, Exit, Session, SessionEvent};
use tasklist::store::fs::JsonFileStore;
use tracing::{info, warn};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(exit) => std::process::exit(exit.code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> io::Result<Exit> {
    let paths = AppPaths::resolve(cli.home);
    let config_file = cli.config.unwrap_or_else(|| paths.config_file());
    let config = AppConfig::load(&config_file).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring config file");
        AppConfig::default()
    });

    let database = paths.database(cli.database.as_deref(), &config);
    let store = JsonFileStore::new(database);
    info!(path = %store.path().display(), "using task file");
    let api = TaskApi::new(store);

    let (tx, rx) = mpsc::channel();
    let interrupt = tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = interrupt.send(SessionEvent::Interrupted);
    }) {
        warn!(error = %e, "could not install signal handler");
    }
    spawn_line_reader(BufReader::new(io::stdin()), tx);

    let mut session = Session::new(api, &config, io::stdout());
    session.start()?;
    let exit = session.run(&rx);
    session.shutdown();
    exit
}
