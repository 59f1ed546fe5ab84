use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// An unparsable `RUST_LOG` falls back to the default filter.
pub fn setup_logging() {
    let env_filter = match EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .try_from_env()
    {
        Ok(filter) => filter,
        Err(err) => {
            if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
                eprintln!("invalid log filter: {err}");
                eprintln!("falling back to default logging");
            }
            EnvFilter::new(LevelFilter::WARN.to_string())
        }
    };

    let _ = tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
