use crate::prelude::*;
use crate::purge::{Page, TopicApi};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client;
use tracing::debug;

pub struct SnsClient {
	client: Client,
}

impl SnsClient {
	pub fn from_config(config: &SdkConfig) -> Self {
		SnsClient {
			client: Client::new(config),
		}
	}
}

#[async_trait]
impl TopicApi for SnsClient {
	async fn list_topics(&self, next_token: Option<String>) -> Result<Page<String>> {
		debug!(?next_token, "sns list_topics");
		let resp = self
			.client
			.list_topics()
			.set_next_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		let arns = resp
			.topics()
			.iter()
			.map(|topic| topic.topic_arn().map(String::from).ok_or(Error::Parse { what: "topic arn" }))
			.collect::<Result<Vec<_>>>()?;

		Ok(Page::new(arns, resp.next_token().map(String::from)))
	}

	async fn count_subscriptions(&self, topic_arn: &str, next_token: Option<String>) -> Result<Page<usize>> {
		debug!(topic_arn, ?next_token, "sns list_subscriptions_by_topic");
		let resp = self
			.client
			.list_subscriptions_by_topic()
			.topic_arn(topic_arn)
			.set_next_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		Ok(Page::new(
			vec![resp.subscriptions().len()],
			resp.next_token().map(String::from),
		))
	}

	async fn delete_topic(&self, topic_arn: &str) -> Result<()> {
		debug!(topic_arn, "sns delete_topic");
		self.client
			.delete_topic()
			.topic_arn(topic_arn)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		Ok(())
	}
}
