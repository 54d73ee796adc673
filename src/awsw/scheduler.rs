use crate::prelude::*;
use crate::purge::{Page, ScheduleRef, SchedulerApi};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_scheduler::Client;
use tracing::debug;

pub struct SchedulerClient {
	client: Client,
}

impl SchedulerClient {
	pub fn from_config(config: &SdkConfig) -> Self {
		SchedulerClient {
			client: Client::new(config),
		}
	}
}

#[async_trait]
impl SchedulerApi for SchedulerClient {
	async fn list_schedules(&self, next_token: Option<String>) -> Result<Page<ScheduleRef>> {
		debug!(?next_token, "scheduler list_schedules");
		let resp = self
			.client
			.list_schedules()
			.set_next_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		let schedules = resp
			.schedules()
			.iter()
			.map(|summary| -> Result<ScheduleRef> {
				let name = summary.name().ok_or(Error::Parse { what: "schedule name" })?;
				Ok(ScheduleRef::new(name, summary.group_name().map(String::from)))
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Page::new(schedules, resp.next_token().map(String::from)))
	}

	async fn delete_schedule(&self, schedule: &ScheduleRef) -> Result<()> {
		debug!(name = %schedule.name, group = %schedule.group, "scheduler delete_schedule");
		self.client
			.delete_schedule()
			.name(&schedule.name)
			.group_name(&schedule.group)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		Ok(())
	}
}
