use clap::Parser;
use env_logger::Env;
use log::{debug, error};
use std::process::ExitCode;
use transaction_stream::actions;
use transaction_stream::cli::Cli;
use transaction_stream::config::{brokers_from_env, load_dotenv};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = load_dotenv();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let action = cli.action;

    match dotenv {
        Ok(Some(path)) => debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let brokers = match brokers_from_env() {
        Ok(brokers) => brokers,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = cli.into_config(brokers);

    match actions::run(action, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if let Some(source) = std::error::Error::source(&e) {
                error!("Caused by: {}", source);
            }
            ExitCode::FAILURE
        }
    }
}
