use std::process::ExitCode;

use log::{error, info};
use showcase::{logging, paths, Showcase};
use trellis::Runtime;

fn main() -> ExitCode {
    // Reported before the terminal takes over; the page still runs without a logger
    match logging::init(paths::cache_dir().as_deref(), logging::log_level()) {
        Ok(path) => info!("Starting showcase, logging to {}", path.display()),
        Err(e) => eprintln!("Warning: {}", e),
    }

    match Runtime::new().run(Showcase) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Runtime error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
