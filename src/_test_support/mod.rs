//! In memory providers for the purge pipelines.
//!
//! Pages are addressed by their index, the "next token" of a page is the index of the next one.

use crate::prelude::*;
use crate::prompt::LinePrompter;
use crate::purge::{
	BucketApi, DeleteFailure, EventsApi, ObjectRef, Page, QueueApi, ScheduleRef, SchedulerApi, TargetRemovalFailure,
	TopicApi, VersionMarker, VersionPage,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

// region:    --- Support

/// Shared record of the provider calls, in call order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
	pub fn push(&self, call: impl Into<String>) {
		self.0.lock().unwrap().push(call.into());
	}

	pub fn all(&self) -> Vec<String> {
		self.0.lock().unwrap().clone()
	}

	/// Number of calls starting with `name`.
	pub fn count(&self, name: &str) -> usize {
		self.0.lock().unwrap().iter().filter(|c| c.starts_with(name)).count()
	}

	pub fn position(&self, call: &str) -> Option<usize> {
		self.0.lock().unwrap().iter().position(|c| c == call)
	}
}

pub fn prompter(answer: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
	LinePrompter::new(Cursor::new(answer.as_bytes().to_vec()), Vec::new())
}

pub fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

fn page_index(token: Option<String>) -> usize {
	token.and_then(|t| t.parse().ok()).unwrap_or(0)
}

fn next_index_token(idx: usize, len: usize) -> Option<String> {
	(idx + 1 < len).then(|| (idx + 1).to_string())
}

fn page_of<T: Clone>(pages: &[Vec<T>], token: Option<String>) -> Page<T> {
	let idx = page_index(token);
	let items = pages.get(idx).cloned().unwrap_or_default();
	Page::new(items, next_index_token(idx, pages.len()))
}

fn fail(msg: &str) -> Error {
	Error::AwsService {
		code: "Simulated".to_string(),
		message: msg.to_string(),
	}
}

// endregion: --- Support

// region:    --- FakeEvents

#[derive(Default)]
pub struct FakeEvents {
	pub rule_pages: Vec<Vec<String>>,
	pub targets: HashMap<String, Vec<String>>,
	pub fail_list_rules: bool,
	pub fail_list_targets: HashSet<String>,
	pub refuse_targets: HashSet<String>,
	pub fail_delete: HashSet<String>,
	pub calls: CallLog,
}

#[async_trait]
impl EventsApi for FakeEvents {
	async fn list_rules(&self, next_token: Option<String>) -> Result<Page<String>> {
		self.calls.push("list_rules");
		if self.fail_list_rules {
			return Err(fail("list rules denied"));
		}
		Ok(page_of(&self.rule_pages, next_token))
	}

	async fn list_targets(&self, rule: &str, next_token: Option<String>) -> Result<Page<String>> {
		self.calls.push(f!("list_targets:{rule}"));
		if self.fail_list_targets.contains(rule) {
			return Err(fail("list targets denied"));
		}
		let targets = self.targets.get(rule).cloned().unwrap_or_default();
		// one target per page, to walk the pagination
		let pages: Vec<Vec<String>> = targets.into_iter().map(|t| vec![t]).collect();
		Ok(page_of(&pages, next_token))
	}

	async fn remove_targets(&self, rule: &str, target_ids: &[String]) -> Result<Vec<TargetRemovalFailure>> {
		self.calls.push(f!("remove_targets:{rule}:{}", target_ids.join(",")));
		if self.refuse_targets.contains(rule) {
			return Ok(target_ids
				.iter()
				.map(|id| TargetRemovalFailure {
					target_id: id.clone(),
					message: "still in use".to_string(),
				})
				.collect());
		}
		Ok(Vec::new())
	}

	async fn delete_rule(&self, rule: &str) -> Result<()> {
		self.calls.push(f!("delete_rule:{rule}"));
		if self.fail_delete.contains(rule) {
			return Err(fail("delete rule denied"));
		}
		Ok(())
	}
}

// endregion: --- FakeEvents

// region:    --- FakeBuckets

/// One page of a bucket version listing: (versions, delete markers).
pub type FakeVersionPage = (Vec<ObjectRef>, Vec<ObjectRef>);

#[derive(Default)]
pub struct FakeBuckets {
	pub bucket_pages: Vec<Vec<String>>,
	pub version_pages: HashMap<String, Vec<FakeVersionPage>>,
	pub object_pages: HashMap<String, Vec<Vec<ObjectRef>>>,
	pub fail_list_buckets: bool,
	pub fail_list_versions: HashSet<String>,
	/// A batch holding one of these keys fails as a whole.
	pub fail_batch_with_key: HashSet<String>,
	/// These keys are reported as per key errors.
	pub reject_keys: HashSet<String>,
	pub fail_delete_bucket: HashSet<String>,
	pub calls: CallLog,
	pub deleted: Arc<Mutex<Vec<ObjectRef>>>,
}

#[async_trait]
impl BucketApi for FakeBuckets {
	async fn list_buckets(&self, next_token: Option<String>) -> Result<Page<String>> {
		self.calls.push("list_buckets");
		if self.fail_list_buckets {
			return Err(fail("list buckets denied"));
		}
		Ok(page_of(&self.bucket_pages, next_token))
	}

	async fn list_object_versions(&self, bucket: &str, marker: Option<VersionMarker>) -> Result<VersionPage> {
		self.calls.push(f!("list_object_versions:{bucket}"));
		if self.fail_list_versions.contains(bucket) {
			return Err(fail("list versions denied"));
		}
		let pages = self.version_pages.get(bucket).cloned().unwrap_or_default();
		let idx = page_index(marker.map(|m| m.key_marker));
		let (versions, delete_markers) = pages.get(idx).cloned().unwrap_or_default();
		let next = next_index_token(idx, pages.len()).map(|key_marker| VersionMarker {
			key_marker,
			version_id_marker: None,
		});
		Ok(VersionPage {
			versions,
			delete_markers,
			next,
		})
	}

	async fn list_objects(&self, bucket: &str, next_token: Option<String>) -> Result<Page<ObjectRef>> {
		self.calls.push(f!("list_objects:{bucket}"));
		let pages = self.object_pages.get(bucket).cloned().unwrap_or_default();
		Ok(page_of(&pages, next_token))
	}

	async fn delete_objects(&self, bucket: &str, objects: &[ObjectRef]) -> Result<Vec<DeleteFailure>> {
		self.calls.push(f!("delete_objects:{bucket}:{}", objects.len()));
		if objects.iter().any(|o| self.fail_batch_with_key.contains(&o.key)) {
			return Err(fail("batch denied"));
		}

		let mut failures = Vec::new();
		let mut deleted = self.deleted.lock().unwrap();
		for object in objects {
			if self.reject_keys.contains(&object.key) {
				failures.push(DeleteFailure {
					object: object.clone(),
					message: "AccessDenied - no".to_string(),
				});
			} else {
				deleted.push(object.clone());
			}
		}
		Ok(failures)
	}

	async fn delete_bucket(&self, bucket: &str) -> Result<()> {
		self.calls.push(f!("delete_bucket:{bucket}"));
		if self.fail_delete_bucket.contains(bucket) {
			return Err(fail("BucketNotEmpty"));
		}
		Ok(())
	}
}

// endregion: --- FakeBuckets

// region:    --- FakeScheduler

#[derive(Default)]
pub struct FakeScheduler {
	pub schedule_pages: Vec<Vec<ScheduleRef>>,
	pub fail_delete: HashSet<String>,
	pub calls: CallLog,
}

#[async_trait]
impl SchedulerApi for FakeScheduler {
	async fn list_schedules(&self, next_token: Option<String>) -> Result<Page<ScheduleRef>> {
		self.calls.push("list_schedules");
		Ok(page_of(&self.schedule_pages, next_token))
	}

	async fn delete_schedule(&self, schedule: &ScheduleRef) -> Result<()> {
		self.calls.push(f!("delete_schedule:{}:{}", schedule.name, schedule.group));
		if self.fail_delete.contains(&schedule.name) {
			return Err(fail("delete schedule denied"));
		}
		Ok(())
	}
}

// endregion: --- FakeScheduler

// region:    --- FakeTopics

#[derive(Default)]
pub struct FakeTopics {
	pub topic_pages: Vec<Vec<String>>,
	/// Subscription count pages per topic arn.
	pub subscription_pages: HashMap<String, Vec<Vec<usize>>>,
	pub fail_subscriptions: HashSet<String>,
	pub fail_delete: HashSet<String>,
	pub calls: CallLog,
}

#[async_trait]
impl TopicApi for FakeTopics {
	async fn list_topics(&self, next_token: Option<String>) -> Result<Page<String>> {
		self.calls.push("list_topics");
		Ok(page_of(&self.topic_pages, next_token))
	}

	async fn count_subscriptions(&self, topic_arn: &str, next_token: Option<String>) -> Result<Page<usize>> {
		self.calls.push(f!("count_subscriptions:{topic_arn}"));
		if self.fail_subscriptions.contains(topic_arn) {
			return Err(fail("list subscriptions denied"));
		}
		let pages = self.subscription_pages.get(topic_arn).cloned().unwrap_or_default();
		Ok(page_of(&pages, next_token))
	}

	async fn delete_topic(&self, topic_arn: &str) -> Result<()> {
		self.calls.push(f!("delete_topic:{topic_arn}"));
		if self.fail_delete.contains(topic_arn) {
			return Err(fail("delete topic denied"));
		}
		Ok(())
	}
}

// endregion: --- FakeTopics

// region:    --- FakeQueues

/// Acts like SQS: the listing applies the prefix itself (here, case insensitive, to check the client side filter).
#[derive(Default)]
pub struct FakeQueues {
	pub queue_urls: Vec<String>,
	pub page_size: usize,
	pub fail_delete: HashSet<String>,
	pub calls: CallLog,
}

#[async_trait]
impl QueueApi for FakeQueues {
	async fn list_queues(&self, prefix: &str, next_token: Option<String>) -> Result<Page<String>> {
		self.calls.push(f!("list_queues:{prefix}"));
		let prefix = prefix.to_lowercase();
		let matching: Vec<String> = self
			.queue_urls
			.iter()
			.filter(|url| url.rsplit('/').next().unwrap_or_default().to_lowercase().starts_with(&prefix))
			.cloned()
			.collect();
		let pages: Vec<Vec<String>> = matching.chunks(self.page_size.max(1)).map(|c| c.to_vec()).collect();
		Ok(page_of(&pages, next_token))
	}

	async fn delete_queue(&self, queue_url: &str) -> Result<()> {
		self.calls.push(f!("delete_queue:{queue_url}"));
		if self.fail_delete.contains(queue_url) {
			return Err(fail("delete queue denied"));
		}
		Ok(())
	}
}

// endregion: --- FakeQueues
