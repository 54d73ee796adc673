use crate::consts::SQS_LIST_QUEUES_PAGE_SIZE;
use crate::prelude::*;
use crate::purge::{Page, QueueApi};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client;
use tracing::debug;

pub struct SqsClient {
	client: Client,
}

impl SqsClient {
	pub fn from_config(config: &SdkConfig) -> Self {
		SqsClient {
			client: Client::new(config),
		}
	}
}

#[async_trait]
impl QueueApi for SqsClient {
	async fn list_queues(&self, prefix: &str, next_token: Option<String>) -> Result<Page<String>> {
		debug!(prefix, ?next_token, "sqs list_queues");
		// Note: SQS only returns a next token when max_results is set.
		let resp = self
			.client
			.list_queues()
			.queue_name_prefix(prefix)
			.max_results(SQS_LIST_QUEUES_PAGE_SIZE)
			.set_next_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		Ok(Page::new(resp.queue_urls().to_vec(), resp.next_token().map(String::from)))
	}

	async fn delete_queue(&self, queue_url: &str) -> Result<()> {
		debug!(queue_url, "sqs delete_queue");
		self.client
			.delete_queue()
			.queue_url(queue_url)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		Ok(())
	}
}
