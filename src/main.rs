//! DELoc - Data Engineering Locally
//!
//! A desktop manager for a local big data stack. Exits with status 1 if the
//! window cannot be started.

use clap::Parser;
use deloc::app::{self, IcedHost, LaunchOptions};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "deloc", version, about = "Big Data Environment Manager")]
struct Args {
    /// Docker Engine endpoint, e.g. http://localhost:2375
    #[arg(long)]
    docker_host: Option<String>,

    /// Simulate the stack even if a Docker host is configured
    #[arg(long)]
    simulate: bool,

    /// Directory holding the DELoc database
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let host = IcedHost::new(LaunchOptions {
        data_dir: args.data_dir,
        docker_host: args.docker_host,
        simulate: args.simulate,
    });

    std::process::exit(app::run(&host));
}
