//! `elc` command-line binary.
//!
//! Scores a questionnaire answer map and prints the archetype, the axis
//! averages, and a result link.
//!
//! # Environment Variables
//!
//! - `ELC_CONFIG` — optional YAML config file
//! - `ELC_BASE_URL` — origin for result links (default: http://localhost:3000)
//! - `ELC_FORMAT` — `json` (default), `yaml` or `text`
//! - `ELC_REQUIRE_COMPLETE` — refuse answer sets missing any of the 27 questions
//! - `RUST_LOG` — Tracing filter (default: "warn,elc=info")
//!
//! # Usage
//!
//! ```bash
//! echo '{"19": 7, "20": 7, "21": 7}' | elc score --format text
//! elc score answers.yaml
//! ```

use anyhow::Context;

use elc::cli::{parse_args, run};
use elc::config::ElcConfig;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,elc=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = parse_args(std::env::args().skip(1)).context("invalid arguments")?;
    let config = ElcConfig::load().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&invocation, &config, &mut stdin.lock(), &mut stdout.lock())
        .with_context(|| format!("'{}' failed", invocation.command()))?;
    Ok(())
}
