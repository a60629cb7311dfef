use std::sync::Arc;

use tour::cli::{self, USAGE};
use tour::tour::{Stdout, Tour};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "TOUR_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("tour: {e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };
    if args.help {
        println!("{USAGE}");
        return;
    }

    let mut tour = Tour::new(Arc::new(Stdout)).with_fetch_delay(args.fetch_delay);
    tour.run(args.selected());

    // -n: leave the callback to fire (or not) before the runtime shuts down.
    if args.no_wait {
        tracing::debug!(pending = tour.pending(), "exiting without waiting");
        return;
    }
    if let Err(e) = tour.wait_pending().await {
        eprintln!("tour: deferred callback failed: {e}");
        std::process::exit(1);
    }
}
