// verstamp - release version stamping
// Main CLI entry point

use clap::Parser;
use std::process;
use verstamp::cli::{Cli, CliDispatcher};
use verstamp::utils::error::UserError;

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli.command);

    if let Err(err) = result {
        log::debug!("Release stamping failed: {err:?}");
        let user_error = UserError::from_release_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
