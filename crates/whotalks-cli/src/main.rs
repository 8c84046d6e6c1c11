use whotalks_core::logging;
use whotalks_core::ScriptError;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        tracing::error!("run failed: {:#}", err);
        eprintln!("whotalks error: {:#}", err);
        if err
            .downcast_ref::<ScriptError>()
            .is_some_and(ScriptError::is_not_found)
        {
            eprintln!("Please visit imsdb.com for a list of available scripts");
        }
        std::process::exit(1);
    }
}
