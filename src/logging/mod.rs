//! Injectable logging capability used by the importers and the writer

/// Sink for debug and error notifications raised during import and export
pub trait CsvLogger {
    fn log_debug(&self, scope: &str, message: &str);
    fn log_error(&self, scope: &str, message: &str);
}

/// Logger that drops everything; the default when none is injected
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl CsvLogger for NoopLogger {
    fn log_debug(&self, _scope: &str, _message: &str) {}
    fn log_error(&self, _scope: &str, _message: &str) {}
}

/// Forwards notifications to the `tracing` ecosystem
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl CsvLogger for TracingLogger {
    fn log_debug(&self, scope: &str, message: &str) {
        tracing::debug!(scope, "{}", message);
    }

    fn log_error(&self, scope: &str, message: &str) {
        tracing::error!(scope, "{}", message);
    }
}

impl<L: CsvLogger + ?Sized> CsvLogger for &L {
    fn log_debug(&self, scope: &str, message: &str) {
        (**self).log_debug(scope, message)
    }

    fn log_error(&self, scope: &str, message: &str) {
        (**self).log_error(scope, message)
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` wins over `default_directive`.
pub fn init_tracing(default_directive: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
