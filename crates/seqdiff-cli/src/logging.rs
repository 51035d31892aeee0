use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Default filter, used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "seqdiff=debug,tower_http=debug"
    } else {
        "seqdiff=info,tower_http=info"
    }
}

/// Install the global subscriber. Logs go to stderr so `seqdiff diff`
/// can write its report to stdout.
pub fn init(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}
