// Logging setup on top of tracing-subscriber.
//
// Library code logs through the `log` facade; `tracing_log::LogTracer`
// forwards those records into the subscriber installed here so they share
// span context with the `tracing` spans opened around service calls.

use jobboard::config::{LogFormat, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Third-party targets capped regardless of the configured level.
const NOISY_TARGETS: &[(&str, &str)] = &[
    ("actix_server", "warn"),
    ("actix_web", "warn"),
    ("mio", "warn"),
];

/// Access log target, lifted back to the configured level under the
/// `actix_web` cap.
const ACCESS_LOG_TARGET: &str = "actix_web::middleware::logger";

/// Filter directives for `level` plus the noisy-target caps.
fn filter_directives(level: &str) -> String {
    let level = level.to_lowercase();
    let mut directives = vec![level.clone()];
    for (target, lvl) in NOISY_TARGETS {
        directives.push(format!("{}={}", target, lvl));
    }
    directives.push(format!("{}={}", ACCESS_LOG_TARGET, level));
    directives.join(",")
}

/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = filter_directives(level);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", directives, e))
}

/// Installs the global subscriber and the `log` bridge. Call once.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_log::LogTracer::init()
        .map_err(|e| anyhow::anyhow!("Failed to install log bridge: {}", e))?;

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(&config.level)?)
        .with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(
        "Logging initialized: level={}, format={:?}",
        config.level,
        config.format
    );
    Ok(())
}
