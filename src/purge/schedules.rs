use super::{collect_pages, retain_prefixed, Page, ResourceCleaner, ResourceKind};
use crate::consts::DEFAULT_SCHEDULE_GROUP;
use crate::prelude::*;
use async_trait::async_trait;

/// A schedule is only addressable by its (name, group) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRef {
	pub name: String,
	pub group: String,
}

impl ScheduleRef {
	/// A missing group resolves to the scheduler default group.
	pub fn new(name: impl Into<String>, group: Option<String>) -> Self {
		ScheduleRef {
			name: name.into(),
			group: group.unwrap_or_else(|| DEFAULT_SCHEDULE_GROUP.to_string()),
		}
	}
}

#[async_trait]
pub trait SchedulerApi: Send + Sync {
	async fn list_schedules(&self, next_token: Option<String>) -> Result<Page<ScheduleRef>>;

	async fn delete_schedule(&self, schedule: &ScheduleRef) -> Result<()>;
}

pub struct ScheduleCleaner<A> {
	api: A,
}

impl<A: SchedulerApi> ScheduleCleaner<A> {
	pub fn new(api: A) -> Self {
		ScheduleCleaner { api }
	}
}

#[async_trait]
impl<A: SchedulerApi> ResourceCleaner for ScheduleCleaner<A> {
	type Item = ScheduleRef;

	fn kind(&self) -> ResourceKind {
		ResourceKind::Schedule
	}

	async fn list_matching(&self, prefix: &str) -> Result<Vec<ScheduleRef>> {
		let api = &self.api;
		let schedules = collect_pages(move |token| api.list_schedules(token)).await?;
		Ok(retain_prefixed(schedules, prefix, |s| s.name.as_str()))
	}

	fn label(&self, schedule: &ScheduleRef) -> String {
		f!("{} (Group: {})", schedule.name, schedule.group)
	}

	async fn purge(&self, schedule: &ScheduleRef) -> Result<()> {
		self.api
			.delete_schedule(schedule)
			.await
			.map_err(|err| Error::delete_failed(f!("schedule {}", schedule.name), err))
	}
}

#[cfg(test)]
#[path = "../_tests/test-schedules.rs"]
mod tests;
