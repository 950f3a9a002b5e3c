mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use dei_insights::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
