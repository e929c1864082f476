use std::env;
use std::error::Error;
use std::process::ExitCode;

use chrono::{Days, NaiveDate, Utc};

use coronalog::{logging, CovidClient, ProviderConfig};

const USAGE: &str = "usage: coronalog worldwide [YYYY-MM-DD]\n       coronalog countries [--top N]";

#[derive(Debug, PartialEq)]
enum Command {
    Worldwide { date: String },
    Countries { top: Option<usize> },
}

fn parse_args(args: &[String], today: NaiveDate) -> Result<Command, String> {
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["worldwide"] => {
            let yesterday = today - Days::new(1);
            Ok(Command::Worldwide { date: yesterday.format("%Y-%m-%d").to_string() })
        }
        ["worldwide", date] => Ok(Command::Worldwide { date: date.to_string() }),
        ["countries"] => Ok(Command::Countries { top: None }),
        ["countries", "--top", n] => n
            .parse()
            .map(|top| Command::Countries { top: Some(top) })
            .map_err(|_| format!("--top expects a number, got {n:?}")),
        _ => Err(USAGE.to_string()),
    }
}

async fn run(command: Command) -> Result<String, Box<dyn Error>> {
    let client = CovidClient::new(ProviderConfig::from_env()?)?;

    let output = match command {
        Command::Worldwide { date } => {
            tracing::info!(%date, "fetching worldwide history");
            let snapshot = client.fetch_worldwide_history(&date).await?;
            serde_json::to_string_pretty(&snapshot)?
        }
        Command::Countries { top } => {
            tracing::info!("fetching cases by country");
            let mut counts = client.fetch_cases_by_country().await?;
            if let Some(top) = top {
                counts.truncate(top);
            }
            serde_json::to_string_pretty(&counts)?
        }
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging("info");

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args, Utc::now().date_naive()) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
