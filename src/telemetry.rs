use tracing_subscriber::EnvFilter;

/// Installs the process-wide log subscriber, writing to stderr so stdout
/// carries only the report.
///
/// `RUST_LOG` overrides `default_level`. Returns false when a subscriber
/// was already installed, in which case the existing one stays in place.
pub fn init(default_level: &str) -> bool {

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chat_oneshot={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()

}
