use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

use lead_distress::overview::{OverviewPatch, RankFilter, SignalRecord};
use lead_distress::scoring::DistressBand;
use lead_distress::store::{PropertyId, StoreState};
use lead_distress::{verbose_eprintln, warn_eprintln};

const EXIT_SUCCESS: i32 = 0;
const EXIT_STORE: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum FinancialCommands {
    /// Show a property's financial record
    Show {
        /// Property id
        id: PropertyId,
    },
    /// Update a property's financial record
    Update {
        /// Property id
        id: PropertyId,
        /// JSON file with the fields to change ("-" or omitted reads stdin)
        input: Option<String>,
        /// Inline JSON instead of a file
        #[arg(short, long)]
        data: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank stored leads by distress score (default if no subcommand)
    List {
        /// Only show leads in this band or above (LOW, MEDIUM, HIGH)
        #[arg(short, long)]
        band: Option<DistressBand>,
        /// Only show leads updated within this window (e.g. "7d", "12h")
        #[arg(short, long)]
        since: Option<String>,
        /// Maximum number of leads to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Score a signal record from a JSON file without storing it
    Score {
        /// JSON file with the record ("-" or omitted reads stdin)
        input: Option<String>,
    },
    /// Show a property's overview with a freshly computed score
    Show {
        /// Property id
        id: PropertyId,
    },
    /// Update a property's overview and recompute its score
    Update {
        /// Property id
        id: PropertyId,
        /// JSON file with the fields to change ("-" or omitted reads stdin)
        input: Option<String>,
        /// Inline JSON instead of a file
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Show the cached distress score of a property
    Distress {
        /// Property id
        id: PropertyId,
    },
    /// Read or update financial distress fields
    Financial {
        #[command(subcommand)]
        command: FinancialCommands,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "lead-distress")]
#[command(about = "Property lead distress scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-distress/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the store file (overrides the config)
    #[arg(long, global = true)]
    store: Option<String>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn fail(code: i32, message: String) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

/// Read JSON input from `--data`, a file, or stdin (in that order).
fn read_input(input: Option<&str>, data: Option<String>) -> Result<String> {
    if let Some(data) = data {
        return Ok(data);
    }

    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path)),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(EXIT_INPUT, format!("Failed to encode output: {}", e)),
    }
}

fn load_state(path: &PathBuf) -> StoreState {
    verbose_eprintln!("Loading store from {}", path.display());
    match lead_distress::store::load_store(path) {
        Ok(state) => {
            verbose_eprintln!(
                "  {} overviews, {} financial records",
                state.overviews.len(),
                state.financials.len()
            );
            state
        }
        Err(e) => fail(EXIT_STORE, format!("Store error: {:#}", e)),
    }
}

fn save_state(path: &PathBuf, state: &StoreState) {
    if let Err(e) = lead_distress::store::save_store(path, state) {
        fail(EXIT_STORE, format!("Store error: {:#}", e));
    }
    verbose_eprintln!("Saved store to {}", path.display());
}

fn main() {
    let cli = Cli::parse();
    lead_distress::diagnostics::set_verbose(cli.verbose);
    let use_colors = lead_distress::output::should_use_colors();

    let command = cli.command.unwrap_or(Commands::List {
        band: None,
        since: None,
        limit: None,
        tsv: false,
    });

    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = lead_distress::config::run_init_wizard(config_path) {
            fail(EXIT_CONFIG, format!("Init error: {:#}", e));
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match lead_distress::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    if let Err(errors) = lead_distress::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let store_path = match cli.store.map(PathBuf::from).or_else(|| config.store_path.clone()) {
        Some(p) => p,
        None => match lead_distress::store::get_store_path() {
            Ok(p) => p,
            Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
        },
    };

    match command {
        Commands::List {
            band,
            since,
            limit,
            tsv,
        } => {
            let updated_since = since.map(|s| {
                let window = humantime::parse_duration(&s)
                    .ok()
                    .and_then(|d| chrono::Duration::from_std(d).ok())
                    .unwrap_or_else(|| {
                        fail(EXIT_INPUT, format!("Invalid --since duration: {}", s))
                    });
                chrono::Utc::now() - window
            });

            let filter = RankFilter {
                min_band: band.or(config.min_band),
                updated_since,
                limit: Some(limit.unwrap_or_else(|| config.effective_list_limit())),
            };

            let state = load_state(&store_path);
            let leads = lead_distress::overview::rank_overviews(&state, &filter);
            verbose_eprintln!("{} of {} leads match", leads.len(), state.overviews.len());

            if cli.json {
                print_json(&leads);
            } else if tsv {
                println!("{}", lead_distress::output::format_tsv(&leads));
            } else {
                println!(
                    "{}",
                    lead_distress::output::format_ranked_table(&leads, use_colors)
                );
            }
        }
        Commands::Score { input } => {
            let raw = match read_input(input.as_deref(), None) {
                Ok(raw) => raw,
                Err(e) => fail(EXIT_INPUT, format!("Input error: {:#}", e)),
            };

            // Anything that is not JSON scores as an empty record
            let value = serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn_eprintln!("input is not valid JSON ({}), scoring an empty record", e);
                serde_json::Value::Null
            });
            let record = SignalRecord::from_json_value(&value);

            for warning in lead_distress::scoring::unknown_signals(&record) {
                warn_eprintln!("{}", warning);
            }

            let result = lead_distress::scoring::calculate_distress_score(&record);
            if cli.json {
                print_json(&result);
            } else {
                println!(
                    "{}",
                    lead_distress::output::format_score_result(&result, use_colors)
                );
            }
        }
        Commands::Show { id } => {
            let state = load_state(&store_path);
            let view = lead_distress::overview::get_overview(&state, id);

            if cli.json {
                print_json(&view);
            } else {
                match view {
                    Some(view) => println!(
                        "{}",
                        lead_distress::output::format_overview(&view, use_colors)
                    ),
                    None => println!("No overview recorded for property {}.", id),
                }
            }
        }
        Commands::Update { id, input, data } => {
            let raw = match read_input(input.as_deref(), data) {
                Ok(raw) => raw,
                Err(e) => fail(EXIT_INPUT, format!("Input error: {:#}", e)),
            };

            let patch: OverviewPatch = match serde_json::from_str(&raw) {
                Ok(p) => p,
                Err(e) => fail(EXIT_INPUT, format!("Input error: invalid overview JSON - {}", e)),
            };

            if let Err(errors) = lead_distress::scoring::validate_patch(&patch) {
                eprintln!("Overview errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_INPUT);
            }

            let mut state = load_state(&store_path);
            let outcome = lead_distress::overview::update_overview(&mut state, id, patch);

            if let Some(entry) = state.overview(id) {
                for warning in lead_distress::scoring::unknown_signals(&entry.record) {
                    warn_eprintln!("property {}: {}", id, warning);
                }
            }

            save_state(&store_path, &state);

            if cli.json {
                print_json(&outcome);
            } else {
                println!(
                    "Updated property {}: {}/100 {}",
                    id,
                    outcome.distress_score,
                    lead_distress::output::format_band(outcome.distress_band, use_colors).trim_end()
                );
            }
        }
        Commands::Distress { id } => {
            let state = load_state(&store_path);
            let summary = lead_distress::overview::get_distress_score(&state, id);

            if cli.json {
                print_json(&summary);
            } else {
                println!(
                    "{}",
                    lead_distress::output::format_summary(id, &summary, use_colors)
                );
            }
        }
        Commands::Financial { command } => match command {
            FinancialCommands::Show { id } => {
                let state = load_state(&store_path);
                let record = lead_distress::financial::get_financial(&state, id);

                if cli.json {
                    print_json(&record);
                } else {
                    match record {
                        Some(record) => {
                            println!("Property {} financials", id);
                            for line in lead_distress::output::format_fields(record) {
                                println!("{}", line);
                            }
                        }
                        None => println!("No financial record for property {}.", id),
                    }
                }
            }
            FinancialCommands::Update { id, input, data } => {
                let raw = match read_input(input.as_deref(), data) {
                    Ok(raw) => raw,
                    Err(e) => fail(EXIT_INPUT, format!("Input error: {:#}", e)),
                };

                let patch: lead_distress::financial::FinancialPatch =
                    match serde_json::from_str(&raw) {
                        Ok(p) => p,
                        Err(e) => fail(
                            EXIT_INPUT,
                            format!("Input error: invalid financial JSON - {}", e),
                        ),
                    };

                if let Err(errors) = lead_distress::financial::validate_financial_patch(&patch) {
                    eprintln!("Financial errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_INPUT);
                }

                let mut state = load_state(&store_path);
                let outcome = lead_distress::financial::update_financial(&mut state, id, patch);
                save_state(&store_path, &state);

                if cli.json {
                    print_json(&outcome);
                } else {
                    println!("Updated financials for property {}", id);
                }
            }
        },
        // Handled before config load
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
