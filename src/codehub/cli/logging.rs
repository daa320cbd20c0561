use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `codehub=debug`.
pub const LOG_ENV: &str = "CODEHUB_LOG";
const DEFAULT_FILTER: &str = "codehub=warn";

/// Installs a stderr subscriber. Stdout stays reserved for command output.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time(),
    );

    // A subscriber may already be set when embedded in tests.
    let _ = subscriber.try_init();
}
