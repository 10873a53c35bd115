mod cli;

use clap::Parser;
use cli::Cli;

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
