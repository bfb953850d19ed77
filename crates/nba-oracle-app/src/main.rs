// Report generator entry point.
//
// 1. Initialize tracing (stderr)
// 2. Load config (seeding config/ from defaults/)
// 3. Read division CSVs, build the report, write the JSON document

use nba_oracle_app::config;
use nba_oracle_app::run;

use anyhow::Context;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("NBA oracle report starting");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: model={} v{}, target season {}, {} divisions",
        config.meta.model,
        config.meta.version,
        config.meta.prediction_target,
        config.divisions.len()
    );

    let summary = match run::execute(&config) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Run failed, no report written: {:#}", e);
            return Err(e);
        }
    };

    if !summary.skipped.is_empty() {
        info!("Skipped divisions: {}", summary.skipped.join(", "));
    }
    info!("Successfully created {}", summary.output.display());
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nba_oracle_core=info,nba_oracle_app=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
