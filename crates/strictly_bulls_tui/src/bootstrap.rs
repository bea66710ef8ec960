//! Wiring a session from the command line and configuration.

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::notifier::{DynNotifier, build_notifier};
use strictly_bulls::{FixedSecrets, RandomSecrets, SecretGenerator, Session};
use tracing::{info, instrument};

/// Boxed secret source chosen from the command line.
pub type DynSecrets = Box<dyn SecretGenerator + Send>;

/// Session type used by every front-end.
pub type AppSession = Session<DynSecrets, DynNotifier>;

/// Picks the secret source: fixed secret, seeded, or OS entropy.
#[instrument(skip(cli))]
pub fn secret_source(cli: &Cli) -> DynSecrets {
    match (cli.fixed_secret, cli.seed) {
        (Some(secret), _) => {
            info!("Using fixed secret");
            Box::new(FixedSecrets::new(secret))
        }
        (None, Some(seed)) => {
            info!(seed, "Using seeded secrets");
            Box::new(RandomSecrets::from_seed(seed))
        }
        (None, None) => Box::new(RandomSecrets::from_os_rng()),
    }
}

/// Builds a session from the command line and configuration.
#[instrument(skip_all)]
pub fn build_session(cli: &Cli, config: &AppConfig) -> anyhow::Result<AppSession> {
    let rules = config.rules()?;
    let notifier = build_notifier(config.sound())?;
    Ok(Session::new(secret_source(cli), notifier, rules))
}
