use crate::awsw::{load_sdk_config, AwsCred, EventsClient, S3Client, SchedulerClient, SnsClient, SqsClient};
use crate::cmd::app::cmd_app;
use crate::prelude::*;
use crate::prompt::LinePrompter;
use crate::purge::{
	run_purge, BucketCleaner, QueueCleaner, ResourceCleaner, RuleCleaner, ScheduleCleaner, TopicCleaner,
};
use clap::ArgMatches;
use tracing::info;

use self::app::{
	ARG_ACCESS_KEY, ARG_ENDPOINT, ARG_FORCE, ARG_PREFIX, ARG_REGION, ARG_SECRET_KEY, SUB_BUCKETS, SUB_QUEUES,
	SUB_RULES, SUB_SCHEDULES, SUB_TOPICS,
};

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();

	match argm.subcommand() {
		Some((name, sub_cmd)) => {
			let args = PurgeArgs::from_argm(sub_cmd)?;
			info!(command = name, prefix = %args.prefix, force = args.force, cred = ?args.cred, "purge");
			let config = load_sdk_config(args.cred.clone()).await;

			match name {
				SUB_RULES => exec_purge(RuleCleaner::new(EventsClient::from_config(&config)), &args).await?,
				SUB_BUCKETS => exec_purge(BucketCleaner::new(S3Client::from_config(&config)), &args).await?,
				SUB_SCHEDULES => exec_purge(ScheduleCleaner::new(SchedulerClient::from_config(&config)), &args).await?,
				SUB_TOPICS => exec_purge(TopicCleaner::new(SnsClient::from_config(&config)), &args).await?,
				SUB_QUEUES => exec_purge(QueueCleaner::new(SqsClient::from_config(&config)), &args).await?,
				_ => return Err(Error::CmdInvalid("Unknown sub command")),
			}
		}
		None => {
			cmd_app().print_long_help()?;
			println!("\n");
		}
	}

	Ok(())
}

async fn exec_purge<C: ResourceCleaner>(cleaner: C, args: &PurgeArgs) -> Result<()> {
	let mut prompter = LinePrompter::stdio();
	let report = run_purge(&cleaner, &args.prefix, args.force, &mut prompter).await?;
	info!(
		status = ?report.status,
		matched = report.matched.len(),
		deleted = report.deleted_count(),
		failed = report.failed_count(),
		"purge done"
	);
	Ok(())
}

// region:    --- Args Utils

struct PurgeArgs {
	cred: AwsCred,
	prefix: String,
	force: bool,
}

impl PurgeArgs {
	fn from_argm(argm: &ArgMatches) -> Result<PurgeArgs> {
		let cred = AwsCred {
			key_id: get_required(argm, ARG_ACCESS_KEY)?,
			key_secret: get_required(argm, ARG_SECRET_KEY)?,
			region: get_required(argm, ARG_REGION)?,
			endpoint: argm.get_one::<String>(ARG_ENDPOINT).cloned(),
		};

		Ok(PurgeArgs {
			cred,
			prefix: get_required(argm, ARG_PREFIX)?,
			force: argm.get_flag(ARG_FORCE),
		})
	}
}

fn get_required(argm: &ArgMatches, name: &'static str) -> Result<String> {
	argm.get_one::<String>(name).cloned().ok_or(Error::MissingArg(name))
}

// endregion: --- Args Utils
