use std::process::ExitCode;

use human_panic::setup_panic;
use log::error;

use pathid::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let argument_matches = get_matches();

    if let Err(e) = init_logger(
        get_verbosity(&argument_matches),
        &get_log_file(&argument_matches),
    ) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match perform_conversion(&argument_matches) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            error!("{failures} input(s) could not be converted");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
