use std::io;
use std::process::ExitCode;

use config::Config;
use error::AppError;
use riot::RiotClient;

mod config;
mod error;
mod logging;
mod report;
mod riot;
mod riot_id;
mod tourney;

#[tokio::main]
async fn main() -> ExitCode {
    // Loads `.env` first so RUST_LOG from it applies to the logger.
    let config = Config::from_env();
    logging::init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "run aborted");
            if err.is_startup() {
                eprintln!("{err}");
            } else {
                eprintln!("Error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Result<Config, AppError>) -> Result<(), AppError> {
    let config = config?;

    let riot_id = riot_id::prompt_riot_id(io::stdin().lock(), &mut io::stdout())?;

    let client = RiotClient::new(
        config.riot_api_key,
        config.account_region,
        config.match_region,
    );

    tourney::run(
        &client,
        &riot_id,
        &config.match_query,
        &config.output_path,
    )
    .await?;

    println!("Results written to {}", config.output_path.display());
    Ok(())
}
