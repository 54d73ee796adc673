use crate::consts::{ENV_AWS_ACCESS_KEY_ID, ENV_AWS_DEFAULT_REGION, ENV_AWS_ENDPOINT, ENV_AWS_SECRET_ACCESS_KEY};
use clap::{crate_version, Arg, ArgAction, Command};

pub const ARG_ACCESS_KEY: &str = "access-key";
pub const ARG_SECRET_KEY: &str = "secret-key";
pub const ARG_REGION: &str = "region";
pub const ARG_ENDPOINT: &str = "endpoint";
pub const ARG_PREFIX: &str = "prefix";
pub const ARG_FORCE: &str = "force";

pub const SUB_RULES: &str = "rules";
pub const SUB_BUCKETS: &str = "buckets";
pub const SUB_SCHEDULES: &str = "schedules";
pub const SUB_TOPICS: &str = "topics";
pub const SUB_QUEUES: &str = "queues";

pub fn cmd_app() -> Command {
	Command::new("aws-purge")
		.version(crate_version!())
		.about("Bulk delete AWS resources whose name starts with a given prefix.")
		.subcommand(sub_purge(SUB_RULES, "Delete EventBridge rules (and their targets) by prefix"))
		.subcommand(sub_purge(
			SUB_BUCKETS,
			"Empty (all versions and delete markers) and delete S3 buckets by prefix",
		))
		.subcommand(sub_purge(SUB_SCHEDULES, "Delete EventBridge Scheduler schedules by prefix"))
		.subcommand(sub_purge(SUB_TOPICS, "Delete SNS topics by prefix"))
		.subcommand(sub_purge(SUB_QUEUES, "Delete SQS queues by prefix"))
}

// region:    --- Sub Commands

/// All the purge sub commands share the same surface.
fn sub_purge(name: &'static str, about: &'static str) -> Command {
	Command::new(name)
		.about(about)
		.args(args_cred())
		.arg(arg_prefix())
		.arg(arg_force())
}

// endregion: --- Sub Commands

// region:    --- Common Args

fn args_cred() -> [Arg; 4] {
	[
		Arg::new(ARG_ACCESS_KEY)
			.long(ARG_ACCESS_KEY)
			.num_args(1)
			.required(true)
			.env(ENV_AWS_ACCESS_KEY_ID)
			.hide_env_values(true)
			.help("AWS access key"),
		Arg::new(ARG_SECRET_KEY)
			.long(ARG_SECRET_KEY)
			.num_args(1)
			.required(true)
			.env(ENV_AWS_SECRET_ACCESS_KEY)
			.hide_env_values(true)
			.help("AWS secret key"),
		Arg::new(ARG_REGION)
			.long(ARG_REGION)
			.num_args(1)
			.required(true)
			.env(ENV_AWS_DEFAULT_REGION)
			.help("AWS region"),
		Arg::new(ARG_ENDPOINT)
			.long(ARG_ENDPOINT)
			.num_args(1)
			.required(false)
			.env(ENV_AWS_ENDPOINT)
			.help("Custom endpoint url (e.g., localstack or minio)"),
	]
}

fn arg_prefix() -> Arg {
	Arg::new(ARG_PREFIX)
		.long(ARG_PREFIX)
		.num_args(1)
		.required(true)
		.help("Resource name prefix to match (case sensitive)")
}

fn arg_force() -> Arg {
	Arg::new(ARG_FORCE)
		.num_args(0)
		.long(ARG_FORCE)
		.action(ArgAction::SetTrue)
		.help("Force the delete (bypassing the prompt)")
}

// endregion: --- Common Args
