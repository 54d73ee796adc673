// region:    --- Modules

mod awsw;
mod cmd;
mod consts;
mod error;
mod prelude;
mod prompt;
mod purge;

#[cfg(test)]
mod _test_support;

use crate::consts::DEFAULT_LOG_FILTER;
use cmd::cmd_run;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// endregion: --- Modules

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	init_tracing();

	match cmd_run().await {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error:\n  {}", e);
			ExitCode::FAILURE
		}
	}
}

/// Diagnostics on stderr, driven by RUST_LOG (e.g., `RUST_LOG=aws_purge=debug`).
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
