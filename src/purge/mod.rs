//! Prefix purge pipelines (list → filter → confirm → delete → report)

// region:    --- Modules

// -- Sub-modules
mod buckets;
mod page;
mod queues;
mod rules;
mod schedules;
mod topics;

// -- Re-exports
pub use self::buckets::{BucketApi, BucketCleaner, DeleteFailure, ObjectRef, VersionMarker, VersionPage};
pub use self::page::{collect_pages, last_segment, retain_prefixed, Page};
pub use self::queues::{QueueApi, QueueCleaner};
pub use self::rules::{EventsApi, RuleCleaner, TargetRemovalFailure};
pub use self::schedules::{ScheduleRef, SchedulerApi, ScheduleCleaner};
pub use self::topics::{TopicApi, TopicCleaner};

// -- Imports
use crate::prelude::*;
use crate::prompt::{confirm, Prompter};
use async_trait::async_trait;
use tracing::{debug, warn};

// endregion: --- Modules

// region:    --- ResourceKind

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
	Rule,
	Bucket,
	Schedule,
	Topic,
	Queue,
}

impl ResourceKind {
	pub fn singular(&self) -> &'static str {
		match self {
			ResourceKind::Rule => "rule",
			ResourceKind::Bucket => "bucket",
			ResourceKind::Schedule => "schedule",
			ResourceKind::Topic => "topic",
			ResourceKind::Queue => "queue",
		}
	}

	pub fn plural(&self) -> &'static str {
		match self {
			ResourceKind::Rule => "rules",
			ResourceKind::Bucket => "buckets",
			ResourceKind::Schedule => "schedules",
			ResourceKind::Topic => "topics",
			ResourceKind::Queue => "queues",
		}
	}

	/// Capitalized singular, for the completion line.
	pub fn title(&self) -> &'static str {
		match self {
			ResourceKind::Rule => "Rule",
			ResourceKind::Bucket => "Bucket",
			ResourceKind::Schedule => "Schedule",
			ResourceKind::Topic => "Topic",
			ResourceKind::Queue => "Queue",
		}
	}

	pub fn warning(&self) -> &'static str {
		match self {
			ResourceKind::Rule => "This will permanently delete these EventBridge rules and remove all their targets.",
			ResourceKind::Bucket => "This will permanently delete all objects in these buckets.",
			ResourceKind::Schedule => "This will permanently delete these EventBridge schedules.",
			ResourceKind::Topic => "This will permanently delete these SNS topics and all their subscriptions.",
			ResourceKind::Queue => "This will permanently delete these SQS queues.",
		}
	}
}

// endregion: --- ResourceKind

// region:    --- ResourceCleaner

/// One resource type, seen by the run driver.
#[async_trait]
pub trait ResourceCleaner: Send + Sync {
	type Item: Send + Sync;

	fn kind(&self) -> ResourceKind;

	/// All the resources whose name starts with `prefix`, in listing order.
	async fn list_matching(&self, prefix: &str) -> Result<Vec<Self::Item>>;

	/// Identifier printed to the operator.
	fn label(&self, item: &Self::Item) -> String;

	/// Remove what blocks the deletion, then delete the resource.
	async fn purge(&self, item: &Self::Item) -> Result<()>;
}

// endregion: --- ResourceCleaner

// region:    --- RunReport

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
	NoMatch,
	Cancelled,
	Completed,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
	pub resource: String,
	pub error: Option<String>,
}

impl RunOutcome {
	pub fn is_success(&self) -> bool {
		self.error.is_none()
	}
}

#[derive(Debug, Clone)]
pub struct RunReport {
	pub status: RunStatus,
	pub matched: Vec<String>,
	pub outcomes: Vec<RunOutcome>,
}

impl RunReport {
	fn new(status: RunStatus, matched: Vec<String>) -> Self {
		RunReport {
			status,
			matched,
			outcomes: Vec::new(),
		}
	}

	pub fn deleted_count(&self) -> usize {
		self.outcomes.iter().filter(|o| o.is_success()).count()
	}

	pub fn failed_count(&self) -> usize {
		self.outcomes.iter().filter(|o| !o.is_success()).count()
	}
}

// endregion: --- RunReport

// region:    --- Run Driver

/// Run one purge: list the matching resources, confirm (unless `force`), then purge them one by one.
/// Only a listing failure returns an Err. Per resource failures are printed and recorded in the report.
pub async fn run_purge<C>(cleaner: &C, prefix: &str, force: bool, prompter: &mut impl Prompter) -> Result<RunReport>
where
	C: ResourceCleaner,
{
	let kind = cleaner.kind();

	// -- List
	println!("Searching for {}...", kind.plural());
	let items = cleaner
		.list_matching(prefix)
		.await
		.map_err(|err| Error::list_failed(kind, err))?;
	let labels: Vec<String> = items.iter().map(|item| cleaner.label(item)).collect();

	if items.is_empty() {
		println!("No {} found with prefix: {prefix}", kind.plural());
		return Ok(RunReport::new(RunStatus::NoMatch, labels));
	}

	println!("\nFound {} {} with prefix '{prefix}':", items.len(), kind.plural());
	for label in labels.iter() {
		println!("- {label}");
	}

	// -- Confirm
	if !confirm(prompter, force, kind.warning())? {
		println!("Operation cancelled");
		return Ok(RunReport::new(RunStatus::Cancelled, labels));
	}

	// -- Delete
	let mut report = RunReport::new(RunStatus::Completed, labels);
	println!("\nDeleting {}...", kind.plural());
	for (item, label) in items.iter().zip(report.matched.iter()) {
		debug!(kind = kind.singular(), resource = %label, "purging");
		let error = match cleaner.purge(item).await {
			Ok(()) => {
				println!("Successfully deleted {}: {label}", kind.singular());
				None
			}
			Err(err) => {
				warn!(kind = kind.singular(), resource = %label, error = %err, "purge failed");
				println!("{err}");
				Some(err.to_string())
			}
		};
		report.outcomes.push(RunOutcome {
			resource: label.clone(),
			error,
		});
	}

	println!(
		"\n{} deletion process complete ({} deleted, {} failed)",
		kind.title(),
		report.deleted_count(),
		report.failed_count()
	);
	if report.failed_count() > 0 {
		println!("Not deleted:");
		for outcome in report.outcomes.iter().filter(|o| !o.is_success()) {
			println!("- {}", outcome.resource);
		}
	}

	Ok(report)
}

// endregion: --- Run Driver

#[cfg(test)]
#[path = "../_tests/test-run-purge.rs"]
mod tests;
