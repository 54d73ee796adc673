use super::{collect_pages, last_segment, retain_prefixed, Page, ResourceCleaner, ResourceKind};
use crate::prelude::*;
use async_trait::async_trait;
use tracing::warn;

#[async_trait]
pub trait TopicApi: Send + Sync {
	/// Topic ARNs.
	async fn list_topics(&self, next_token: Option<String>) -> Result<Page<String>>;

	/// Number of subscriptions in one page of the topic subscriptions listing.
	async fn count_subscriptions(&self, topic_arn: &str, next_token: Option<String>) -> Result<Page<usize>>;

	async fn delete_topic(&self, topic_arn: &str) -> Result<()>;
}

pub struct TopicCleaner<A> {
	api: A,
}

impl<A: TopicApi> TopicCleaner<A> {
	pub fn new(api: A) -> Self {
		TopicCleaner { api }
	}

	async fn subscription_count(&self, topic_arn: &str) -> Result<usize> {
		let api = &self.api;
		let counts = collect_pages(move |token| api.count_subscriptions(topic_arn, token)).await?;
		Ok(counts.into_iter().sum())
	}
}

#[async_trait]
impl<A: TopicApi> ResourceCleaner for TopicCleaner<A> {
	type Item = String;

	fn kind(&self) -> ResourceKind {
		ResourceKind::Topic
	}

	async fn list_matching(&self, prefix: &str) -> Result<Vec<String>> {
		let api = &self.api;
		let arns = collect_pages(move |token| api.list_topics(token)).await?;
		Ok(retain_prefixed(arns, prefix, |arn| last_segment(arn, ':')))
	}

	fn label(&self, topic_arn: &String) -> String {
		topic_arn.clone()
	}

	/// Subscriptions are only reported. DeleteTopic removes them on the service side.
	async fn purge(&self, topic_arn: &String) -> Result<()> {
		match self.subscription_count(topic_arn).await {
			Ok(count) => println!("\nTopic {topic_arn} has {count} subscriptions"),
			Err(err) => {
				warn!(topic = %topic_arn, error = %err, "subscription count failed");
				println!("Could not fetch subscriptions for {topic_arn}: {err}");
			}
		}

		self.api
			.delete_topic(topic_arn)
			.await
			.map_err(|err| Error::delete_failed(f!("topic {topic_arn}"), err))
	}
}

#[cfg(test)]
#[path = "../_tests/test-topics.rs"]
mod tests;
