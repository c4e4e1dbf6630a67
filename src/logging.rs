use tracing::Level;

/// WARN by default, one step down per `-v`, bottoming out at DEBUG.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Builds the stderr subscriber for one run. The caller installs it as the
/// scoped default rather than a process-wide global.
pub fn subscriber(verbosity: u8) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish()
}
