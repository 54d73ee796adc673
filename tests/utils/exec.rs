use anyhow::Result;
use std::process::{Command, Stdio};

const AWS_PURGE_BIN: &str = env!("CARGO_BIN_EXE_aws-purge");

// Never let the caller environment pick the account.
const ENV_CLEARED: [&str; 5] = [
	"AWS_ACCESS_KEY_ID",
	"AWS_SECRET_ACCESS_KEY",
	"AWS_DEFAULT_REGION",
	"AWS_ENDPOINT",
	"RUST_LOG",
];

// Placeholder credentials, only for the invalid endpoint tests.
pub const TEST_CRED_ARGS: [&str; 6] = [
	"--access-key",
	"AKIDPURGETEST",
	"--secret-key",
	"purge-test-secret",
	"--region",
	"us-east-1",
];

pub fn exec_purge(sub_cmd: &str, args: &[&str], print_exec: bool) -> Result<(bool, String)> {
	let mut cmd_args = vec![sub_cmd];
	cmd_args.extend_from_slice(args);

	let output = exec_output(AWS_PURGE_BIN, &cmd_args, &ExecConfig { print_exec })?;

	Ok(output)
}

struct ExecConfig {
	print_exec: bool,
}

impl Default for ExecConfig {
	fn default() -> Self {
		Self {
			print_exec: true,
		}
	}
}

/// Returns (success, stdout) on success, (success, stdout + stderr) otherwise.
fn exec_output(cmd: &str, args: &[&str], config: &ExecConfig) -> Result<(bool, String)> {
	let ExecConfig { print_exec } = config;

	if *print_exec {
		println!("> executing: {} {}", cmd, args.join(" "));
	}

	let mut proc = Command::new(cmd);

	proc.args(args);

	for name in ENV_CLEARED {
		proc.env_remove(name);
	}

	// no operator, a prompt reads end of input
	let output = proc.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

	let stdout = String::from_utf8(output.stdout)?;
	if output.status.success() {
		Ok((true, stdout))
	} else {
		let stderr = String::from_utf8(output.stderr)?;
		Ok((false, format!("{stdout}{stderr}")))
	}
}
