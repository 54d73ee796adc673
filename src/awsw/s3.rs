use crate::consts::S3_LIST_BUCKETS_PAGE_SIZE;
use crate::prelude::*;
use crate::purge::{BucketApi, DeleteFailure, ObjectRef, Page, VersionMarker, VersionPage};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::operation::list_object_versions::ListObjectVersionsOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use aws_sdk_s3::{config, Client};
use tracing::debug;

pub struct S3Client {
	client: Client,
}

impl S3Client {
	/// With a custom endpoint (minio, localstack, ...) the bucket goes in the path, not the host.
	pub fn from_config(sdk_config: &SdkConfig) -> Self {
		let conf = config::Builder::from(sdk_config)
			.force_path_style(sdk_config.endpoint_url().is_some())
			.build();

		S3Client {
			client: Client::from_conf(conf),
		}
	}
}

#[async_trait]
impl BucketApi for S3Client {
	async fn list_buckets(&self, next_token: Option<String>) -> Result<Page<String>> {
		debug!(?next_token, "s3 list_buckets");
		let resp = self
			.client
			.list_buckets()
			.max_buckets(S3_LIST_BUCKETS_PAGE_SIZE)
			.set_continuation_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		let names = resp
			.buckets()
			.iter()
			.map(|b| b.name().map(String::from).ok_or(Error::Parse { what: "bucket name" }))
			.collect::<Result<Vec<_>>>()?;

		Ok(Page::new(names, resp.continuation_token().map(String::from)))
	}

	async fn list_object_versions(&self, bucket: &str, marker: Option<VersionMarker>) -> Result<VersionPage> {
		debug!(bucket, ?marker, "s3 list_object_versions");
		let (key_marker, version_id_marker) = match marker {
			Some(VersionMarker {
				key_marker,
				version_id_marker,
			}) => (Some(key_marker), version_id_marker),
			None => (None, None),
		};

		let resp = self
			.client
			.list_object_versions()
			.bucket(bucket)
			.set_key_marker(key_marker)
			.set_version_id_marker(version_id_marker)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		to_version_page(resp)
	}

	async fn list_objects(&self, bucket: &str, next_token: Option<String>) -> Result<Page<ObjectRef>> {
		debug!(bucket, ?next_token, "s3 list_objects_v2");
		let resp = self
			.client
			.list_objects_v2()
			.bucket(bucket)
			.set_continuation_token(next_token)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		to_object_page(resp)
	}

	async fn delete_objects(&self, bucket: &str, objects: &[ObjectRef]) -> Result<Vec<DeleteFailure>> {
		debug!(bucket, count = objects.len(), "s3 delete_objects");
		let identifiers = objects
			.iter()
			.map(|o| {
				ObjectIdentifier::builder()
					.key(&o.key)
					.set_version_id(o.version_id.clone())
					.build()
			})
			.collect::<core::result::Result<Vec<_>, _>>()?;

		// quiet, so only the failed keys come back
		let delete = Delete::builder().set_objects(Some(identifiers)).quiet(true).build()?;

		let resp = self
			.client
			.delete_objects()
			.bucket(bucket)
			.delete(delete)
			.send()
			.await
			.map_err(Error::from_sdk)?;

		let failures = resp
			.errors()
			.iter()
			.map(|e| DeleteFailure {
				object: ObjectRef::new(e.key().unwrap_or_default(), e.version_id().map(String::from)),
				message: f!(
					"{} - {}",
					e.code().unwrap_or_default(),
					e.message().unwrap_or_default()
				),
			})
			.collect();

		Ok(failures)
	}

	async fn delete_bucket(&self, bucket: &str) -> Result<()> {
		debug!(bucket, "s3 delete_bucket");
		self.client.delete_bucket().bucket(bucket).send().await.map_err(Error::from_sdk)?;
		Ok(())
	}
}

// region:    --- Support

fn to_version_page(resp: ListObjectVersionsOutput) -> Result<VersionPage> {
	let versions = resp
		.versions()
		.iter()
		.map(|v| to_object_ref(v.key(), v.version_id()))
		.collect::<Result<Vec<_>>>()?;
	let delete_markers = resp
		.delete_markers()
		.iter()
		.map(|m| to_object_ref(m.key(), m.version_id()))
		.collect::<Result<Vec<_>>>()?;

	// markers are only meaningful on a truncated listing
	let next = if resp.is_truncated().unwrap_or(false) {
		let key_marker = resp.next_key_marker().ok_or(Error::Parse { what: "next key marker" })?;
		Some(VersionMarker {
			key_marker: key_marker.to_string(),
			version_id_marker: resp.next_version_id_marker().map(String::from),
		})
	} else {
		None
	};

	Ok(VersionPage {
		versions,
		delete_markers,
		next,
	})
}

fn to_object_page(resp: ListObjectsV2Output) -> Result<Page<ObjectRef>> {
	let objects = resp
		.contents()
		.iter()
		.map(|o| to_object_ref(o.key(), None))
		.collect::<Result<Vec<_>>>()?;

	let next_token = match resp.is_truncated() {
		Some(true) => resp.next_continuation_token().map(String::from),
		_ => None,
	};

	Ok(Page::new(objects, next_token))
}

fn to_object_ref(key: Option<&str>, version_id: Option<&str>) -> Result<ObjectRef> {
	let key = key.ok_or(Error::Parse { what: "object key" })?;
	Ok(ObjectRef::new(key, version_id.map(String::from)))
}

// endregion: --- Support

#[cfg(test)]
#[path = "../_tests/test-awsw-s3.rs"]
mod tests;
