use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered at `level` for this crate.
///
/// `RUST_LOG`, when set, takes precedence. Returns `false` if a global
/// subscriber was already installed.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("finance_dash_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
