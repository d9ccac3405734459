use clap::Parser;

use factorial_cli::{run, setup_logger, Cli};

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();
    let Cli { args } = Cli::parse();

    run::handle_command(args)
}
