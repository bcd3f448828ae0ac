mod cli;
mod infra;
mod render;
mod session;

use coach_readiness::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
