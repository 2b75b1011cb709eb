//! Entry point for the syncheck daemon.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use syncheckd::{
    StructuredHealthReporter, SystemConfigLoader, SystemShutdownSignal, bootstrap_with,
};

#[tokio::main]
async fn main() -> ExitCode {
    let reporter = Arc::new(StructuredHealthReporter::new());

    let server = match bootstrap_with(&SystemConfigLoader, reporter) {
        Ok(server) => server,
        Err(error) => {
            // Telemetry may not be installed yet, so echo the failure directly.
            drop(writeln!(io::stderr(), "syncheckd: {error}"));
            return ExitCode::FAILURE;
        }
    };

    match server.serve(SystemShutdownSignal::new()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            drop(writeln!(io::stderr(), "syncheckd: {error}"));
            ExitCode::FAILURE
        }
    }
}
