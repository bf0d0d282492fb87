use std::process::ExitCode;

use af_core::{Error, FetchConfig, Result};
use af_scrapers::logging::init_logging;
use af_scrapers::{handle_command, ArticleScraper, FetchArgs};
use af_storage::JsonFileStorage;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

/// Fetch a web page and save its title and main text as JSON.
#[derive(Parser, Debug)]
#[command(name = "fetch-article", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    fetch: FetchArgs,

    /// Log debug output, including which selector rules matched
    #[arg(short, long)]
    verbose: bool,
}

async fn run(cli: Cli) -> Result<()> {
    let storage = JsonFileStorage::new(&cli.fetch.output);
    let scraper = ArticleScraper::with_config(FetchConfig::default())?;
    debug!("Writing output to {}", storage.path().display());

    handle_command(&cli.fetch, &scraper, &storage).await?;
    println!("Article saved to {}", cli.fetch.output.display());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let usage = Error::Usage(e.render().to_string());
            eprint!("{}", usage);
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
