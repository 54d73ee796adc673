use super::{collect_pages, retain_prefixed, Page, ResourceCleaner, ResourceKind};
use crate::consts::S3_MAX_DELETE_BATCH;
use crate::prelude::*;
use async_trait::async_trait;
use tracing::{debug, warn};

// region:    --- Types

/// An object key, optionally pinned to one version (object version or delete marker).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
	pub key: String,
	pub version_id: Option<String>,
}

impl ObjectRef {
	pub fn new(key: impl Into<String>, version_id: Option<String>) -> Self {
		ObjectRef {
			key: key.into(),
			version_id,
		}
	}
}

/// Where the next page of a version listing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMarker {
	pub key_marker: String,
	pub version_id_marker: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VersionPage {
	pub versions: Vec<ObjectRef>,
	pub delete_markers: Vec<ObjectRef>,
	pub next: Option<VersionMarker>,
}

/// Per key error reported by a batch delete.
#[derive(Debug, Clone)]
pub struct DeleteFailure {
	pub object: ObjectRef,
	pub message: String,
}

// endregion: --- Types

#[async_trait]
pub trait BucketApi: Send + Sync {
	async fn list_buckets(&self, next_token: Option<String>) -> Result<Page<String>>;

	async fn list_object_versions(&self, bucket: &str, marker: Option<VersionMarker>) -> Result<VersionPage>;

	async fn list_objects(&self, bucket: &str, next_token: Option<String>) -> Result<Page<ObjectRef>>;

	/// One batch delete call. `objects` must not exceed the provider batch limit.
	async fn delete_objects(&self, bucket: &str, objects: &[ObjectRef]) -> Result<Vec<DeleteFailure>>;

	async fn delete_bucket(&self, bucket: &str) -> Result<()>;
}

pub struct BucketCleaner<A> {
	api: A,
}

impl<A: BucketApi> BucketCleaner<A> {
	pub fn new(api: A) -> Self {
		BucketCleaner { api }
	}

	/// Delete every object version, delete marker and remaining object of the bucket.
	/// Returns false if a listing or any batch failed. Batch failures do not stop the walk.
	pub async fn empty_bucket(&self, bucket: &str) -> bool {
		let mut emptied = true;

		// -- Versions and delete markers
		println!("Listing object versions in {bucket}...");
		let mut marker: Option<VersionMarker> = None;
		loop {
			let page = match self.api.list_object_versions(bucket, marker.take()).await {
				Ok(page) => page,
				Err(err) => {
					warn!(bucket, error = %err, "list object versions failed");
					println!("Error listing object versions in {bucket}: {err}");
					return false;
				}
			};

			let VersionPage {
				mut versions,
				delete_markers,
				next,
			} = page;
			versions.extend(delete_markers);
			emptied &= self.delete_batch(bucket, &versions, "objects/versions").await;

			match next {
				Some(next) => marker = Some(next),
				None => break,
			}
		}

		// -- Remaining objects (unversioned buckets, or what the version listing missed)
		println!("Checking for remaining objects in {bucket}...");
		let mut token: Option<String> = None;
		loop {
			let page = match self.api.list_objects(bucket, token.take()).await {
				Ok(page) => page,
				Err(err) => {
					warn!(bucket, error = %err, "list objects failed");
					println!("Error listing remaining objects in {bucket}: {err}");
					return false;
				}
			};

			emptied &= self.delete_batch(bucket, &page.items, "remaining objects").await;

			match page.next_token {
				Some(next) if !next.is_empty() => token = Some(next),
				_ => break,
			}
		}

		emptied
	}

	/// Batch delete `objects`, chunked to the provider limit. Returns false if any chunk failed.
	async fn delete_batch(&self, bucket: &str, objects: &[ObjectRef], what: &str) -> bool {
		let mut ok = true;

		for chunk in objects.chunks(S3_MAX_DELETE_BATCH) {
			debug!(bucket, count = chunk.len(), "delete objects");
			match self.api.delete_objects(bucket, chunk).await {
				Ok(failures) if failures.is_empty() => println!("Deleted {} {what}", chunk.len()),
				Ok(failures) => {
					ok = false;
					println!(
						"Deleted {} {what}, {} could not be deleted",
						chunk.len() - failures.len(),
						failures.len()
					);
					for DeleteFailure { object, message } in failures {
						println!(
							"  Error deleting {} (version: {}): {message}",
							object.key,
							object.version_id.as_deref().unwrap_or("-")
						);
					}
				}
				Err(err) => {
					ok = false;
					warn!(bucket, error = %err, "delete objects failed");
					println!("Error deleting {} {what} in {bucket}: {err}", chunk.len());
				}
			}
		}

		ok
	}
}

#[async_trait]
impl<A: BucketApi> ResourceCleaner for BucketCleaner<A> {
	type Item = String;

	fn kind(&self) -> ResourceKind {
		ResourceKind::Bucket
	}

	async fn list_matching(&self, prefix: &str) -> Result<Vec<String>> {
		let api = &self.api;
		let buckets = collect_pages(move |token| api.list_buckets(token)).await?;
		Ok(retain_prefixed(buckets, prefix, |name| name.as_str()))
	}

	fn label(&self, bucket: &String) -> String {
		bucket.clone()
	}

	/// The bucket delete is only attempted once the bucket was fully emptied.
	async fn purge(&self, bucket: &String) -> Result<()> {
		println!("\nEmptying bucket {bucket}...");
		if !self.empty_bucket(bucket).await {
			return Err(Error::BucketNotEmptied(bucket.clone()));
		}

		self.api
			.delete_bucket(bucket)
			.await
			.map_err(|err| Error::delete_failed(f!("bucket {bucket}"), err))
	}
}

#[cfg(test)]
#[path = "../_tests/test-buckets.rs"]
mod tests;
