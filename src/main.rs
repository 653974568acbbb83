mod domain;
mod clients;
mod resource_framework;
mod pipeline;
mod error;

mod app_system;

#[cfg(test)]
mod mock_framework;

use std::process::ExitCode;
use tracing::{error, info};
use crate::app_system::{setup_tracing, AppConfig, AppError, ReportSystem};
use crate::pipeline::render_report;

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    info!("Starting FanCode task completion report");

    match run().await {
        Ok(()) => {
            info!("Report completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Report generation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!(base_url = %config.base_url, threshold = config.threshold, "Configuration loaded");

    let system = ReportSystem::new(&config)?;
    let records = system.run().await?;

    let rendered = render_report(&records).map_err(AppError::Render)?;
    println!("{rendered}");
    Ok(())
}
