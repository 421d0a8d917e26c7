//! CLI entry point for the headless bomb arena simulator

use bomb_arena::io::cli::{Cli, SimulationRunner};
use bomb_arena::io::logging::{init_logging, level_for_verbosity};
use clap::Parser;

fn main() -> bomb_arena::Result<()> {
    let cli = Cli::parse();
    init_logging(level_for_verbosity(cli.verbose, cli.quiet));
    let runner = SimulationRunner::new(cli);
    runner.run().map(|_| ())
}
