use crate::prelude::*;
use crate::purge::{EventsApi, Page, TargetRemovalFailure};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_eventbridge::operation::list_rules::ListRulesOutput;
use aws_sdk_eventbridge::Client;
use tracing::debug;

pub struct EventsClient {
	client: Client,
}

impl EventsClient {
	pub fn from_config(config: &SdkConfig) -> Self {
		EventsClient {
			client: Client::new(config),
		}
	}
}

#[async_trait]
impl EventsApi for EventsClient {
	async fn list_rules(&self, next_token: Option<String>) -> Result<Page<String>> {
		debug!(?next_token, "events list_rules");
		let resp = self
			.client
			.list_rules()
			.set_next_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		to_rule_page(resp)
	}

	async fn list_targets(&self, rule: &str, next_token: Option<String>) -> Result<Page<String>> {
		debug!(rule, ?next_token, "events list_targets_by_rule");
		let resp = self
			.client
			.list_targets_by_rule()
			.rule(rule)
			.set_next_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		let ids = resp.targets().iter().map(|target| target.id().to_string()).collect();

		Ok(Page::new(ids, resp.next_token().map(String::from)))
	}

	async fn remove_targets(&self, rule: &str, target_ids: &[String]) -> Result<Vec<TargetRemovalFailure>> {
		debug!(rule, count = target_ids.len(), "events remove_targets");
		let resp = self
			.client
			.remove_targets()
			.rule(rule)
			.set_ids(Some(target_ids.to_vec()))
			.force(true)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		let failures = resp
			.failed_entries()
			.iter()
			.map(|entry| TargetRemovalFailure {
				target_id: entry.target_id().unwrap_or_default().to_string(),
				message: entry.error_message().unwrap_or_default().to_string(),
			})
			.collect();

		Ok(failures)
	}

	async fn delete_rule(&self, rule: &str) -> Result<()> {
		debug!(rule, "events delete_rule");
		self.client
			.delete_rule()
			.name(rule)
			.force(true)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		Ok(())
	}
}

// region:    --- Support

fn to_rule_page(resp: ListRulesOutput) -> Result<Page<String>> {
	let names = resp
		.rules()
		.iter()
		.map(|rule| rule.name().map(String::from).ok_or(Error::Parse { what: "rule name" }))
		.collect::<Result<Vec<_>>>()?;

	Ok(Page::new(names, resp.next_token().map(String::from)))
}

// endregion: --- Support

#[cfg(test)]
#[path = "../_tests/test-awsw-events.rs"]
mod tests;
