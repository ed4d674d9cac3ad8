use tracing_subscriber::EnvFilter;

/// Filter used under `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "newsnex=debug,newsnex_core=debug";

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown unless
/// `verbose` is on.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { VERBOSE_FILTER } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))
}
