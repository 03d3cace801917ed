//! rig-config CLI entry point.

use clap::Parser;

use rig_config::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = rig_config::cli::run(cli) {
        rig_config::cli::handle_error(&err, json_mode);
    }
}
