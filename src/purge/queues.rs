use super::{collect_pages, last_segment, retain_prefixed, Page, ResourceCleaner, ResourceKind};
use crate::prelude::*;
use async_trait::async_trait;

#[async_trait]
pub trait QueueApi: Send + Sync {
	/// Queue urls, filtered server side by name prefix.
	async fn list_queues(&self, prefix: &str, next_token: Option<String>) -> Result<Page<String>>;

	async fn delete_queue(&self, queue_url: &str) -> Result<()>;
}

pub struct QueueCleaner<A> {
	api: A,
}

impl<A: QueueApi> QueueCleaner<A> {
	pub fn new(api: A) -> Self {
		QueueCleaner { api }
	}
}

#[async_trait]
impl<A: QueueApi> ResourceCleaner for QueueCleaner<A> {
	type Item = String;

	fn kind(&self) -> ResourceKind {
		ResourceKind::Queue
	}

	async fn list_matching(&self, prefix: &str) -> Result<Vec<String>> {
		let api = &self.api;
		let urls = collect_pages(move |token| api.list_queues(prefix, token)).await?;
		// The server prefix filter is not trusted for case or url shape.
		Ok(retain_prefixed(urls, prefix, |url| last_segment(url, '/')))
	}

	fn label(&self, queue_url: &String) -> String {
		queue_url.clone()
	}

	async fn purge(&self, queue_url: &String) -> Result<()> {
		self.api
			.delete_queue(queue_url)
			.await
			.map_err(|err| Error::delete_failed(f!("queue {queue_url}"), err))
	}
}

#[cfg(test)]
#[path = "../_tests/test-queues.rs"]
mod tests;
