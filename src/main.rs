use anyhow::Context;
use dotenv::dotenv;
use rand::{CryptoRng, RngCore};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod crypto;
mod error;
mod report;
mod validation;

use config::Config;
use crypto::TokenEncryptor;
use error::TokenError;

fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    let mut encryptor = TokenEncryptor::new();

    let report = match run(env::args(), &config, &mut encryptor) {
        Ok(report) => report,
        Err(e) => {
            error!("Token encryption aborted: {}", e);
            eprintln!("{}", e.remediation());
            return ExitCode::FAILURE;
        }
    };

    match emit(&report) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[instrument(skip_all)]
fn run<I, R>(
    args: I,
    config: &Config,
    encryptor: &mut TokenEncryptor<R>,
) -> Result<String, TokenError>
where
    I: IntoIterator<Item = String>,
    R: RngCore + CryptoRng,
{
    let secret = validation::validate_args(args)?;
    let token = encryptor.encrypt(&secret)?;
    info!("Token encrypted ({} bytes of input)", secret.len());

    Ok(report::render(&token, config))
}

fn emit(report: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write the encrypted token to stdout")
}
