//! `chargegraph` command-line interface.
//!
//! Runs a single command given on the command line, or starts a REPL.
//! Every result is printed as JSON.

mod parse;

use std::path::Path;
use std::process::ExitCode;

use chargegraph_engine::GraphConfig;
use chargegraph_executor::{ChargeGraph, Command};
use clap::{Arg, ArgAction};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use crate::parse::{parse_command, HELP};

fn cli() -> clap::Command {
    clap::Command::new("chargegraph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Charge graph between selling points")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("TOML config file (default: ./chargegraph.toml if present)"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("FILTER")
                .help("Log filter, overrides RUST_LOG (default: info)"),
        )
        .arg(
            Arg::new("no-seed")
                .long("no-seed")
                .action(ArgAction::SetTrue)
                .help("Do not load the default dataset on startup"),
        )
        .arg(
            Arg::new("command")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Command to run once; starts a REPL when omitted"),
        )
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>, no_seed: bool) -> Result<GraphConfig, String> {
    let mut config = match path {
        Some(p) => GraphConfig::from_file(p).map_err(|e| e.to_string())?,
        None if Path::new(GraphConfig::FILE_NAME).exists() => {
            GraphConfig::from_file(GraphConfig::FILE_NAME).map_err(|e| e.to_string())?
        }
        None => GraphConfig::default(),
    };
    if no_seed {
        config.seed_on_start = false;
    }
    Ok(config)
}

/// Execute and print. Returns false on failure.
fn run(graph: &ChargeGraph, cmd: Command) -> bool {
    match graph.executor().execute(cmd) {
        Ok(output) => {
            println!("{}", output.to_json_pretty());
            true
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            false
        }
    }
}

fn repl(graph: &ChargeGraph) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline("chargegraph> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line) {
            tracing::debug!(target: "chargegraph::cli", error = %e, "history entry not recorded");
        }

        match line {
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            _ => {}
        }

        let Some(tokens) = shlex::split(line) else {
            eprintln!("(error) unbalanced quotes");
            continue;
        };
        match parse_command(&tokens) {
            Ok(cmd) => {
                run(graph, cmd);
            }
            Err(msg) => eprintln!("(error) {}", msg),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_one::<String>("log").map(String::as_str));

    let config = match load_config(
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_flag("no-seed"),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("(error) {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        target: "chargegraph::cli",
        charge_lease_secs = config.charge_lease_secs,
        seed = config.seed_on_start,
        "opening charge graph"
    );
    let graph = match ChargeGraph::open(config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("(error) {}", e);
            return ExitCode::FAILURE;
        }
    };

    let words: Vec<String> = matches
        .get_many::<String>("command")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    if words.is_empty() {
        if let Err(e) = repl(&graph) {
            eprintln!("(error) {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let cmd = match parse_command(&words) {
        Ok(cmd) => cmd,
        Err(msg) => {
            eprintln!("(error) {}", msg);
            return ExitCode::FAILURE;
        }
    };
    if run(&graph, cmd) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
