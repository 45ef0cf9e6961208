//! CLI entry point for the tile-matching game

use clap::Parser;
use tilelink::io::cli::{Cli, run};
use tilelink::io::logging::init_tracing;

fn main() -> tilelink::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    run(&cli, stdin.lock(), &mut stdout)
}
