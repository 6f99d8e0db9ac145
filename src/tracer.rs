use tracing_subscriber::prelude::*;

/// Installs the global subscriber. Verbose mode surfaces crawl logs (ours and
/// the browser library's, via the log bridge); otherwise everything is
/// filtered out so stdout stays clean markdown.
pub fn init(verbose: bool) {
    let filter = if verbose { "debug" } else { "off" };

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(fmt_layer)
        .try_init();
}
