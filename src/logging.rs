use tracing_subscriber::{fmt, EnvFilter};

/// Install the log subscriber. Progress is logged at `info`; `verbose` adds the layout
/// decisions made for each row. `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let default = if verbose { "label_gen=debug" } else { "label_gen=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init();
}
