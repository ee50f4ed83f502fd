use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use networkdays::{WorkCalendar, parse_partial_iso};

#[derive(Parser, Debug)]
#[command(name = "networkdays", about = "Business days calendar & job scheduling")]
struct CliArgs {
    /// Initial date in ISO format yyyy-mm-dd. You may pass partial dates
    /// "yyyy-mm" or even "yyyy"
    date_initial: String,

    /// Final date, same format as the initial date. Defaults to one year
    /// after the initial date
    #[clap(short = 'f', long = "date_final")]
    date_final: Option<String>,
}

fn run(args: &CliArgs) -> Result<String> {
    let date_initial = parse_partial_iso(&args.date_initial)?;
    let date_final = match &args.date_final {
        Some(raw) => Some(parse_partial_iso(raw)?),
        None => None,
    };

    let calendar = WorkCalendar::new(date_initial, date_final)?;
    let days = calendar.working_days();
    Ok(serde_json::to_string(&days)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
