//! Command line surface. No AWS account is needed.

use anyhow::Result;
use utils::{exec_purge, XString, SUB_COMMANDS, TEST_CRED_ARGS, UNREACHABLE_ENDPOINT};

mod utils;

#[test]
fn test_cli_help_lists_sub_commands() -> Result<()> {
	// EXEC
	let (success, out) = exec_purge("--help", &[], false)?;

	// CHECK
	assert!(success, "--help should succeed. Out:\n{out}");
	for sub in SUB_COMMANDS {
		assert!(out.x_lines().any(|l| l.trim_start().starts_with(sub)), "'{sub}' missing. Out:\n{out}");
	}

	Ok(())
}

#[test]
fn test_cli_sub_commands_share_surface() -> Result<()> {
	for sub in SUB_COMMANDS {
		// EXEC
		let (success, out) = exec_purge(sub, &["--help"], false)?;

		// CHECK
		assert!(success, "{sub} --help should succeed");
		for flag in ["--access-key", "--secret-key", "--region", "--prefix", "--force", "--endpoint"] {
			assert!(out.contains(flag), "{sub} is missing {flag}. Out:\n{out}");
		}
	}

	Ok(())
}

#[test]
fn test_cli_missing_prefix_fails() -> Result<()> {
	// EXEC
	let (success, out) = exec_purge("queues", &TEST_CRED_ARGS, false)?;

	// CHECK
	assert!(!success, "should fail without --prefix");
	assert!(out.contains("--prefix"), "Out:\n{out}");

	Ok(())
}

#[test]
fn test_cli_missing_credentials_fails() -> Result<()> {
	// EXEC
	let (success, out) = exec_purge("topics", &["--prefix", "x-", "--region", "us-east-1"], false)?;

	// CHECK
	assert!(!success, "should fail without credentials");
	assert!(out.contains("--access-key"), "Out:\n{out}");

	Ok(())
}

#[test]
fn test_cli_listing_error_exits_non_zero() -> Result<()> {
	// FIXTURE
	let mut args = TEST_CRED_ARGS.to_vec();
	args.extend(["--endpoint", UNREACHABLE_ENDPOINT, "--prefix", "job-", "--force"]);

	// EXEC
	let (success, out) = exec_purge("rules", &args, false)?;

	// CHECK
	assert!(!success, "a listing error should exit non zero. Out:\n{out}");
	assert!(out.x_has_line("Searching for rules..."), "Out:\n{out}");
	assert!(out.contains("Error listing rules:"), "Out:\n{out}");
	assert!(!out.contains("Deleting rules"), "Out:\n{out}");

	Ok(())
}
