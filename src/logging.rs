use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. The level comes only from `-v` flags.
pub fn init(verbose: u8) {
    let filter = EnvFilter::new(level_for(verbose));

    // try_init fails if a subscriber is already installed; the first one stays.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
