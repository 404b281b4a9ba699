use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use wxttl::{export, Config, Dataset, QueryError, WeatherCard, WeatherQuery};

#[derive(Parser)]
#[command(author, version, about = "Weather observations of French stations", long_about = None)]
struct Cli {
    /// Config file (defaults to ./wxttl.toml when present)
    #[arg(short, long, env = "WXTTL_CONFIG")]
    config: Option<PathBuf>,

    /// Turtle dataset, overrides the config file
    #[arg(short, long, env = "WXTTL_DATASET")]
    dataset: Option<PathBuf>,

    /// More logging, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cities that can be queried
    Cities,
    /// List station ids and their cities
    Stations,
    /// Show the observations of a city on a day
    Show {
        #[arg(long)]
        city: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Time slot to select on the card
        #[arg(long, default_value_t = 0)]
        slot: usize,
        #[arg(long, value_enum, default_value_t = Format::Card)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Card,
    Json,
    Csv,
}

fn init_logging(config: &Config, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => config.level_filter()?,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    init_logging(&config, cli.verbose)?;

    let dataset = match Dataset::load(&config.dataset) {
        Ok(d) => d,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", QueryError::from(e));
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.command {
        Commands::Cities => {
            for city in dataset.index().cities() {
                println!("{city}");
            }
        }
        Commands::Stations => {
            for (station_id, city) in dataset.index().iter() {
                println!("{station_id}\t{city}");
            }
        }
        Commands::Show {
            city,
            date,
            slot,
            format,
        } => {
            let query = WeatherQuery::new(city, date);

            let report = match dataset.query(&query, &config.window) {
                Ok(r) => r,
                Err(e) => {
                    if let QueryError::Dataset(inner) = &e {
                        error!("{inner}");
                    }
                    eprintln!("{e}");
                    return Ok(ExitCode::FAILURE);
                }
            };

            match format {
                Format::Card => print!("{}", WeatherCard::new(&report, config.units).select(slot)),
                Format::Json => println!("{}", export::to_json(&report)?),
                Format::Csv => export::write_csv(&report, io::stdout().lock())?,
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
