use anyhow::Result;
use clap::Command;

fn main() -> Result<()> {
    popmon::init_logging();

    // No options besides --help/--version; thresholds are asked for interactively
    Command::new("popmon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watches CPU, RAM and disk usage and shows a desktop pop-up when a threshold is reached")
        .get_matches();

    popmon::commands::monitor()
}
