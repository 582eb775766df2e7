use lema_config::Environment;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Default filter directives: our crate at `level`, noisy dependencies at warn.
pub fn default_directives(level: &str) -> String {
    format!(
        "{}={},tower_http=warn,sqlx=warn",
        env!("CARGO_CRATE_NAME"),
        level
    )
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set. Production writes JSON
/// lines; every other environment gets compact console output.
pub fn init_tracing(level: &str, environment: Environment) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let layer = if environment.is_production() {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).try_init()
}
