mod commands;
mod render;

use calorie_core::*;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "caltrack")]
#[command(about = "USDA food lookup and daily calorie log", long_about = None)]
struct Cli {
    /// Action to perform
    #[arg(long, value_enum, default_value_t = Action::List)]
    action: Action,

    /// Maximum number of items to return (defaults to the configured value, 50)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max: Option<u32>,

    /// Food to search for (search)
    #[arg(long, required_if_eq("action", "search"))]
    food: Option<String>,

    /// Day to show, add to, or remove from, as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    day: Option<NaiveDate>,

    /// Food identifier (get_details, add, remove)
    #[arg(long, required_if_eq_any([
        ("action", "get_details"),
        ("action", "add"),
        ("action", "remove"),
    ]))]
    ndbno: Option<String>,

    /// Weight of food consumed in grams (add)
    #[arg(long, default_value_t = 100.0, value_parser = parse_quantity)]
    qtd: f64,

    /// Override the ledger file
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Action {
    /// List foods in the database
    List,
    /// Search foods by name
    Search,
    /// Show every nutrient of one food
    #[value(name = "get_details")]
    GetDetails,
    /// Log a food for a day
    Add,
    /// Remove a food from a day
    Remove,
    /// Show the foods logged on a day
    Show,
}

fn parse_quantity(s: &str) -> std::result::Result<f64, String> {
    let qtd: f64 = s
        .parse()
        .map_err(|_| format!("`{}` is not a number of grams", s))?;
    if !qtd.is_finite() || qtd <= 0.0 {
        return Err(format!("quantity must be a positive number of grams, got {}", s));
    }
    Ok(qtd)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        calorie_core::logging::init_with_level("debug");
    } else {
        calorie_core::logging::init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let ledger_path = cli
        .ledger
        .clone()
        .unwrap_or_else(|| config.data.ledger_path.clone());
    let max = cli.max.unwrap_or(config.api.default_max);
    let day = cli.day.unwrap_or_else(today);

    match cli.action {
        Action::List => {
            let api = UsdaClient::from_config(&config)?;
            print!("{}", render::render(&ApiResponse::List(api.list_foods(max)?)));
        }
        Action::Search => {
            let query = required(cli.food.as_deref(), "--food")?;
            let api = UsdaClient::from_config(&config)?;
            print!(
                "{}",
                render::render(&ApiResponse::Search(api.search_foods(query, max)?))
            );
        }
        Action::GetDetails => {
            let ndbno = required(cli.ndbno.as_deref(), "--ndbno")?;
            let api = UsdaClient::from_config(&config)?;
            print!(
                "{}",
                render::render(&ApiResponse::Detail(api.food_detail(ndbno)?))
            );
        }
        Action::Add => {
            let ndbno = required(cli.ndbno.as_deref(), "--ndbno")?;
            let api = UsdaClient::from_config(&config)?;
            let stored = commands::add(&api, &ledger_path, day, ndbno, cli.qtd)?;
            println!(
                "Added {}g of {} ({}) on {}, {}g logged that day",
                cli.qtd, stored.name, ndbno, day, stored.quantity
            );
        }
        Action::Remove => {
            let ndbno = required(cli.ndbno.as_deref(), "--ndbno")?;
            match commands::remove(&ledger_path, day, ndbno)? {
                Some(removed) => println!("Erased {} ({}) from {}", removed.name, ndbno, day),
                None => println!("{} is not logged on {}, nothing to remove", ndbno, day),
            }
        }
        Action::Show => match commands::show(&ledger_path, day)? {
            Some(log) => print!("{}", render::render_day(day, &log)?),
            None => println!("There is no record for {}", day),
        },
    }

    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn required<'a>(value: Option<&'a str>, flag: &str) -> Result<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Other(format!("{} is required for this action", flag)))
}
