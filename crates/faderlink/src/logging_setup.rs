use anyhow::{Context, Result};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

/// Logging options taken from the command line
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
}

impl LogConfig {
    /// Parse the configured level, falling back to INFO if invalid
    pub fn parse_level(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::INFO)
    }
}

/// Initialize the logging system
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.parse_level().into())
        .from_env_lossy(); // RUST_LOG env var takes precedence

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Logging initialized at level: {}", config.level);

    Ok(())
}
