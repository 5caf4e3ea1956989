//! SixDegrees CLI: degrees of separation from the command line.
//!
//! Usage:
//!   sixdegrees query <START> <END> [--json] [--db path | --graph-json file]
//!   sixdegrees play [--anchor NAME]
//!   sixdegrees list

use clap::{Parser, Subcommand};
use sixdegrees::{
    Connection, GraphId, JsonSource, SearchConfig, SixDegrees, SnapshotSource, SqliteSource,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const GRAPH: &str = "main";

#[derive(Parser)]
#[command(
    name = "sixdegrees",
    version,
    about = "Degrees of separation through shared episodes and films"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to SQLite database file (defaults to $SIXDEGREES_DB, then the data dir)
    #[arg(long, global = true, conflicts_with = "graph_json")]
    db: Option<PathBuf>,
    /// Load the graph from a JSON document instead of SQLite
    #[arg(long, global = true)]
    graph_json: Option<PathBuf>,
    /// YAML search config (denylist, max_expansions, max_depth)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the chain connecting two people
    Query {
        /// Where the chain starts
        start: String,
        /// Where the chain ends
        end: String,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive game: how far is everyone from the anchor?
    Play {
        /// Person every answer is measured from
        #[arg(long, default_value = "Captain James T. Kirk")]
        anchor: String,
    },
    /// List all people in the graph
    List,
}

/// Get the default database path (~/.local/share/sixdegrees/star_trek.sqlite)
fn default_db_path() -> PathBuf {
    if let Some(path) = std::env::var_os("SIXDEGREES_DB") {
        return PathBuf::from(path);
    }
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("sixdegrees").join("star_trek.sqlite")
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sixdegrees=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_engine(cli: &Cli) -> Result<SixDegrees, String> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?,
        None => SearchConfig::default(),
    };

    let source: Box<dyn SnapshotSource> = match &cli.graph_json {
        Some(path) => Box::new(
            JsonSource::open(path)
                .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?,
        ),
        None => {
            let db_path = cli.db.clone().unwrap_or_else(default_db_path);
            Box::new(
                SqliteSource::open(&db_path)
                    .map_err(|e| format!("Failed to open database: {}", e))?,
            )
        }
    };

    let engine = SixDegrees::with_config(config);
    engine
        .load(GRAPH, source.as_ref())
        .map_err(|e| format!("Failed to load graph: {}", e))?;
    Ok(engine)
}

/// Display name for what the user typed, falling back to the raw text
fn display_name(engine: &SixDegrees, text: &str) -> String {
    engine
        .resolve(&GraphId::from(GRAPH), text)
        .ok()
        .flatten()
        .map(|p| p.name)
        .unwrap_or_else(|| text.to_string())
}

fn print_steps(from: &str, connection: &Connection) {
    let mut previous = from.to_string();
    for step in connection.steps() {
        println!(
            "\t{} was in {} with {}.",
            previous, step.event.title, step.person.name
        );
        previous = step.person.name.clone();
    }
}

fn cmd_query(engine: &SixDegrees, start: &str, end: &str, json: bool) -> i32 {
    let connection = match engine.find_connection(&GraphId::from(GRAPH), start, end) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if json {
        return match serde_json::to_string_pretty(&connection) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }

    let start_name = display_name(engine, start);
    let end_name = display_name(engine, end);
    match connection.degrees() {
        Some(0) => println!("{} and {} are the same person.", start_name, end_name),
        Some(n) => {
            println!("{} and {} are {} degree(s) apart.", start_name, end_name, n);
            print_steps(&start_name, &connection);
        }
        None => println!("No connection between {} and {}.", start_name, end_name),
    }
    0
}

fn cmd_play(engine: &SixDegrees, anchor: &str) -> i32 {
    let graph = GraphId::from(GRAPH);
    let anchor_name = match engine.resolve(&graph, anchor) {
        Ok(Some(person)) => person.name,
        Ok(None) => {
            eprintln!("Error: '{}' is not in the graph", anchor);
            return 1;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let number = anchor_name
        .split_whitespace()
        .last()
        .unwrap_or(anchor_name.as_str())
        .to_string();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Please enter character name (or press Enter to exit): ");
        if std::io::stdout().flush().is_err() {
            return 1;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error: {}", e);
                return 1;
            }
            None => String::new(),
        };
        let name = line.trim();
        if name.is_empty() {
            println!("Thank you for playing!");
            return 0;
        }

        match engine.find_connection(&graph, anchor_name.as_str(), name) {
            Ok(connection) => {
                let shown = display_name(engine, name);
                match connection.degrees() {
                    Some(n) => {
                        println!("{} has a {} Number of {}.", shown, number, n);
                        print_steps(&anchor_name, &connection);
                    }
                    None => println!("{} has a {} Number of Infinity.", shown, number),
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }
}

fn cmd_list(engine: &SixDegrees) -> i32 {
    let Some(store) = engine.snapshot(&GraphId::from(GRAPH)) else {
        eprintln!("Error: graph not loaded");
        return 1;
    };
    if store.person_count() == 0 {
        println!("No people loaded.");
        return 0;
    }
    println!("{:<16}  {:<40}  {:>6}", "ID", "NAME", "EVENTS");
    println!("{}", "-".repeat(66));
    for (_, person) in store.all_persons() {
        println!(
            "{:<16}  {:<40}  {:>6}",
            person.id.as_str(),
            person.name,
            person.events().len()
        );
    }
    0
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let engine = match open_engine(&cli) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match &cli.command {
        Commands::Query { start, end, json } => cmd_query(&engine, start, end, *json),
        Commands::Play { anchor } => cmd_play(&engine, anchor),
        Commands::List => cmd_list(&engine),
    };
    std::process::exit(code);
}
