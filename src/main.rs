//! casefit CLI entry point

fn main() {
    // Reports go to stdout; keep logging quiet unless RUST_LOG asks for more.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    casefit::cli::run();
}
