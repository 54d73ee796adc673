use super::{collect_pages, retain_prefixed, Page, ResourceCleaner, ResourceKind};
use crate::prelude::*;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct TargetRemovalFailure {
	pub target_id: String,
	pub message: String,
}

/// EventBridge rule calls used by the rule purge.
#[async_trait]
pub trait EventsApi: Send + Sync {
	async fn list_rules(&self, next_token: Option<String>) -> Result<Page<String>>;

	async fn list_targets(&self, rule: &str, next_token: Option<String>) -> Result<Page<String>>;

	/// Forced removal. Returns the targets the service refused to remove.
	async fn remove_targets(&self, rule: &str, target_ids: &[String]) -> Result<Vec<TargetRemovalFailure>>;

	/// Forced delete.
	async fn delete_rule(&self, rule: &str) -> Result<()>;
}

pub struct RuleCleaner<A> {
	api: A,
}

impl<A: EventsApi> RuleCleaner<A> {
	pub fn new(api: A) -> Self {
		RuleCleaner { api }
	}

	/// Remove every target of `rule`. Nothing is called when the rule has no target.
	async fn remove_all_targets(&self, rule: &str) -> Result<()> {
		let api = &self.api;
		let target_ids = collect_pages(move |token| api.list_targets(rule, token)).await?;

		if target_ids.is_empty() {
			return Ok(());
		}

		println!("\nRemoving {} targets from rule: {rule}", target_ids.len());
		let failures = self.api.remove_targets(rule, &target_ids).await?;

		match failures.first() {
			None => Ok(()),
			Some(first) => Err(Error::Generic(f!(
				"{} target(s) not removed (first: {} - {})",
				failures.len(),
				first.target_id,
				first.message
			))),
		}
	}
}

#[async_trait]
impl<A: EventsApi> ResourceCleaner for RuleCleaner<A> {
	type Item = String;

	fn kind(&self) -> ResourceKind {
		ResourceKind::Rule
	}

	async fn list_matching(&self, prefix: &str) -> Result<Vec<String>> {
		let api = &self.api;
		let rules = collect_pages(move |token| api.list_rules(token)).await?;
		Ok(retain_prefixed(rules, prefix, |name| name.as_str()))
	}

	fn label(&self, rule: &String) -> String {
		rule.clone()
	}

	async fn purge(&self, rule: &String) -> Result<()> {
		self.remove_all_targets(rule)
			.await
			.map_err(|err| Error::dependent_clear("targets", f!("rule {rule}"), err))?;

		self.api
			.delete_rule(rule)
			.await
			.map_err(|err| Error::delete_failed(f!("rule {rule}"), err))
	}
}

#[cfg(test)]
#[path = "../_tests/test-rules.rs"]
mod tests;
