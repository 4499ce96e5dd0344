use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::{Config, FrontEnd};

/// Install the global subscriber. `RUST_LOG` wins over `--log-level`.
///
/// The full-screen UI owns stdout and stderr, so it only logs when a file is given.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    match (&config.log_file, config.front_end) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, FrontEnd::Console) => builder.with_writer(std::io::stderr).init(),
        (None, FrontEnd::Tui) => {}
    }
    Ok(())
}
