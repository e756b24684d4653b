//! `peek_min` timing harness
//!
//! Prints one `size<TAB>average_ns` line per heap size to stdout. Progress
//! and diagnostics go to stderr through `tracing`.
//!
//! ## Running
//!
//! ```bash
//! # Full run: sizes 2^10 through 2^25
//! cargo run --release --bin heap_timing
//!
//! # Stop at 2^16
//! cargo run --release --bin heap_timing -- 16
//!
//! # Small, reproducible run with debug logging
//! RUST_LOG=debug HEAP_TIMING_MAX_EXP=14 HEAP_TIMING_SEED=1 cargo run --release --bin heap_timing
//! ```
//!
//! See [`binary_min_heap::timing`] for the `HEAP_TIMING_*` variables.

use binary_min_heap::timing::{self, ConfigError, TimingConfig};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn load_config() -> Result<TimingConfig, ConfigError> {
    let mut config = TimingConfig::from_env()?;

    // Optional positional argument: largest size exponent
    if let Some(arg) = std::env::args().nth(1) {
        config.max_exponent = arg.parse().map_err(|_| ConfigError::Invalid {
            key: "max exponent argument".to_string(),
            value: arg.clone(),
        })?;
        config.validate()?;
    }

    Ok(config)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install log subscriber: {}", e);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Usage: heap_timing [MAX_EXPONENT]");
            std::process::exit(1);
        }
    };

    tracing::info!(
        min_exponent = config.min_exponent,
        max_exponent = config.max_exponent,
        iterations = config.iterations,
        "starting peek_min timing"
    );

    timing::run(&config, |sample| println!("{}", sample));
}
