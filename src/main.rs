use std::process::ExitCode;

use portfolio::config::ExportConfig;
use portfolio::export;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ExportConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid export configuration");
            return ExitCode::FAILURE;
        }
    };

    match export::write_site(&config) {
        Ok(summary) => {
            for path in &summary.written {
                tracing::info!(path = %path.display(), "wrote");
            }
            tracing::info!(out_dir = %config.out_dir.display(), files = summary.written.len(), "portfolio exported");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            ExitCode::FAILURE
        }
    }
}
