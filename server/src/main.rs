use std::process::ExitCode;

use log::error;

use mailbrief_server::logging::{init_logging, LogFormat};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_logging(LogFormat::from_env()) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match mailbrief::load_effective_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match mailbrief_server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
