//! # factorial
//!
//! Prints the factorial of an integer.
//!
//! ## Usage
//! Without arguments the binary prints `5!`:
//!
//! ```sh
//! $ factorial
//! 120
//! ```
//!
//! The input, the evaluation strategy and the overflow policy can be set with flags or
//! with `FACTORIAL_RUN_INPUT`, `FACTORIAL_RUN_STRATEGY` and `FACTORIAL_RUN_OVERFLOW`.
//! Flags win over the environment. The same variables may also come from a dotenv file
//! named by `FACTORIAL_CONFIG_ENV`. Logs are written to stderr and filtered by `RUST_LOG`.
//!
//! ```sh
//! factorial --help
//! ```

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod run;

#[derive(Debug, Parser)]
#[command(name = "factorial", bin_name = "factorial")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: run::RunArgs,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}
