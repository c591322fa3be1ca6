use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs a stderr tracing subscriber so stdout stays reserved for the
/// version report. `RUST_LOG` directives are layered on top of
/// `versionflag=warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{
            filter::{Directive, LevelFilter},
            fmt, EnvFilter,
        };

        let directive: Directive = "versionflag=warn"
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into());
        let filter = EnvFilter::from_default_env().add_directive(directive);

        // A host may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
