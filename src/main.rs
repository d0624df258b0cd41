use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use ephcalc::calculator::{CalculatorService, EphRequest, EphResponse};
use ephcalc::config::AppConfig;
use ephcalc::error::{CalcError, CalcResult, EphCalcError};
use ephcalc::interactive::InteractiveSession;
use ephcalc::locale::{Language, Translations};
use ephcalc::logging::{init_logging, log_error};
use ephcalc::models::CalculationMode;
use ephcalc::report::TrackReport;
use ephcalc::track::{parse_distance, parse_pace};

/// ephcalc - Effort and track pace calculator
///
/// Rates hikes and trail runs in effort points per hour (EpH) and turns a
/// per-kilometer pace into 400 m track splits.
#[derive(Parser)]
#[command(name = "ephcalc")]
#[command(version)]
#[command(about = "Effort per hour and track split calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output language (en, zh)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total effort points for a distance and climb
    Ep {
        /// Distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,

        /// Elevation gain in meters
        #[arg(allow_negative_numbers = true)]
        elevation: f64,
    },

    /// Effort points per hour for a finished activity
    Eph {
        /// Distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,

        /// Elevation gain in meters
        #[arg(allow_negative_numbers = true)]
        elevation: f64,

        /// Elapsed time (H, H:MM or H:MM:SS)
        time: String,
    },

    /// Time needed to hold a target EpH
    Time {
        /// Distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,

        /// Elevation gain in meters
        #[arg(allow_negative_numbers = true)]
        elevation: f64,

        /// Target effort points per hour
        #[arg(allow_negative_numbers = true)]
        eph: f64,
    },

    /// 400 m splits for a pace per kilometer
    Track {
        /// Pace as M:SS or M
        pace: String,

        /// Plan laps for a distance such as 3km
        #[arg(short, long)]
        distance: Option<String>,

        /// Include 10 km, half marathon and marathon projections
        #[arg(short, long)]
        races: bool,
    },

    /// Prompt for inputs instead of reading arguments
    Interactive {
        /// Run the track calculator
        #[arg(long)]
        track: bool,
    },

    /// Configure application settings
    Config {
        /// Print the active configuration
        #[arg(long, conflicts_with = "init")]
        show: bool,

        /// Write a default configuration file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // A config file cannot be required to exist before it is created
    let config = match &cli.command {
        Commands::Config { init: true, .. } => AppConfig::default(),
        _ => AppConfig::load(cli.config.as_deref())?,
    };

    let mut log_config = config.logging.clone();
    log_config.level = log_config.level.raised_by(cli.verbose);
    init_logging(&log_config).context("Failed to initialize logging")?;

    let language = cli
        .lang
        .as_deref()
        .map(Language::from_code_or_default)
        .unwrap_or(config.settings.language);
    let t = Translations::for_language(language);
    let service = CalculatorService::new(t).with_decimal_places(config.settings.decimal_places);
    debug!(%language, decimal_places = config.settings.decimal_places, "Configuration loaded");

    match cli.command {
        Commands::Ep {
            distance,
            elevation,
        } => {
            let line = service.total_ep(distance, elevation);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&EphResponse {
                    result: line,
                    error: None,
                })?);
            } else {
                println!("{}", line.green().bold());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Eph {
            distance,
            elevation,
            time,
        } => {
            let request = EphRequest {
                mode: CalculationMode::Eph.to_string(),
                distance,
                elevation,
                time: Some(time),
                eph: None,
            };
            print_eph_response(&service, &request, cli.json)
        }

        Commands::Time {
            distance,
            elevation,
            eph,
        } => {
            let request = EphRequest {
                mode: CalculationMode::Time.to_string(),
                distance,
                elevation,
                time: None,
                eph: Some(eph),
            };
            print_eph_response(&service, &request, cli.json)
        }

        Commands::Track {
            pace,
            distance,
            races,
        } => {
            let report = parse_pace(&pace)
                .map_err(CalcError::from)
                .and_then(|seconds| -> CalcResult<TrackReport> {
                    let distance_km = distance
                        .as_deref()
                        .map(parse_distance)
                        .transpose()?;
                    TrackReport::build(seconds, races, distance_km)
                });

            match report {
                Ok(report) if cli.json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    Ok(ExitCode::SUCCESS)
                }
                Ok(report) => {
                    println!("{}", t.track_title.blue().bold());
                    let mut stdout = io::stdout().lock();
                    report.write_text(&mut stdout, t)?;
                    stdout.flush()?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    let message = t.calc_error(&err);
                    log_error(&EphCalcError::from(err));
                    fail(message, cli.json)
                }
            }
        }

        Commands::Interactive { track } => {
            let stdin = io::stdin();
            let mut session = InteractiveSession::new(stdin.lock(), io::stdout().lock(), service)
                .with_default_mode(config.settings.default_mode);

            let solved = if track {
                session.run_track()?
            } else {
                session.run_effort()?
            };
            Ok(if solved {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Config { show, init } => {
            let path = cli.config.unwrap_or_else(AppConfig::default_config_path);

            if init {
                if path.exists() {
                    bail!("Config file already exists: {}", path.display());
                }
                let mut fresh = AppConfig::default();
                fresh.save_to_file(&path)?;
                println!("{} {}", "✓ Configuration written to".green(), path.display());
            } else if show {
                print!("{}", toml::to_string_pretty(&config)?);
            } else {
                println!("{}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print an EpH or time response and turn a reported error into a failing exit
fn print_eph_response(service: &CalculatorService, request: &EphRequest, json: bool) -> Result<ExitCode> {
    let response = service.handle_eph(request);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(if response.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match &response.error {
        None => {
            println!("{}", service.total_ep(request.distance, request.elevation));
            println!("{}", response.result.green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Some(message) => fail(message, false),
    }
}

fn fail(message: &str, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::json!({ "error": message }));
    } else {
        eprintln!("{}", message.red());
    }
    Ok(ExitCode::FAILURE)
}
