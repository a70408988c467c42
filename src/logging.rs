use crate::error::{ErrorKind, GrindError};

/// Initialize structured logging with tracing.
/// Call once at startup; later calls return an error instead of panicking.
pub fn init_logging() -> Result<(), GrindError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .json()
        );

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        GrindError::new(
            ErrorKind::State,
            format!("Failed to set global tracing subscriber: {}", e),
        )
        .with_origin("tracing")
    })?;

    tracing::info!("Structured logging initialized");
    Ok(())
}
