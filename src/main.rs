//! Binary entrypoint for the `landing` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // .env supplies LANDING_API_BASE for the live snapshot adapters.
    dotenvy::dotenv().ok();
    match landing::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
