// Installs the JSON log formatter for the host process. Safe to call more than once,
// only the first call installs the subscriber.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log collectors render ANSI color codes as noise.
        .with_ansi(false)
        // the log collector stamps ingestion time itself.
        .without_time()
        .json()
        .try_init();
}
