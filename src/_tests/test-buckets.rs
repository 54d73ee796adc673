use super::*;
use crate::_test_support::{strings, FakeBuckets};
use std::collections::{HashMap, HashSet};

fn version(key: &str, id: &str) -> ObjectRef {
	ObjectRef::new(key, Some(id.to_string()))
}

/// bucket "test-a": two version pages (versions + delete markers), one remaining object.
fn fake_buckets() -> FakeBuckets {
	FakeBuckets {
		bucket_pages: vec![strings(&["test-a", "prod-x"]), strings(&["test-b"])],
		version_pages: HashMap::from([(
			"test-a".to_string(),
			vec![
				(vec![version("k1", "v1"), version("k1", "v2")], vec![version("k2", "m1")]),
				(vec![version("k3", "v1")], vec![]),
			],
		)]),
		object_pages: HashMap::from([("test-a".to_string(), vec![vec![ObjectRef::new("k4", None)]])]),
		..Default::default()
	}
}

#[tokio::test]
async fn test_buckets_list_matching() -> Result<()> {
	let cleaner = BucketCleaner::new(fake_buckets());

	let buckets = cleaner.list_matching("test-").await?;

	assert_eq!(buckets, strings(&["test-a", "test-b"]));
	Ok(())
}

#[tokio::test]
async fn test_buckets_purge_versions_and_markers_then_bucket() -> Result<()> {
	let fake = fake_buckets();
	let calls = fake.calls.clone();
	let deleted = fake.deleted.clone();
	let cleaner = BucketCleaner::new(fake);

	cleaner.purge(&"test-a".to_string()).await?;

	// -- Check deleted objects: exactly V ∪ D first, then the unversioned leftovers
	let deleted = deleted.lock().unwrap().clone();
	let versioned: HashSet<ObjectRef> = deleted[..4].iter().cloned().collect();
	let expected: HashSet<ObjectRef> = [
		version("k1", "v1"),
		version("k1", "v2"),
		version("k2", "m1"),
		version("k3", "v1"),
	]
	.into_iter()
	.collect();
	assert_eq!(versioned, expected);
	assert_eq!(deleted[4], ObjectRef::new("k4", None));
	assert_eq!(deleted.len(), 5);

	// -- Check call order: one batch per version page, before the plain listing, bucket last
	assert_eq!(
		calls.all(),
		strings(&[
			"list_object_versions:test-a",
			"delete_objects:test-a:3",
			"list_object_versions:test-a",
			"delete_objects:test-a:1",
			"list_objects:test-a",
			"delete_objects:test-a:1",
			"delete_bucket:test-a",
		])
	);
	Ok(())
}

#[tokio::test]
async fn test_buckets_batches_chunked_to_provider_max() -> Result<()> {
	let versions: Vec<ObjectRef> = (0..2500).map(|i| version(&f!("key-{i}"), "v1")).collect();
	let fake = FakeBuckets {
		version_pages: HashMap::from([("big".to_string(), vec![(versions, vec![])])]),
		..Default::default()
	};
	let calls = fake.calls.clone();
	let deleted = fake.deleted.clone();
	let cleaner = BucketCleaner::new(fake);

	cleaner.purge(&"big".to_string()).await?;

	assert_eq!(calls.count("delete_objects:big:1000"), 2);
	assert_eq!(calls.count("delete_objects:big:500"), 1);
	assert_eq!(deleted.lock().unwrap().len(), 2500);
	assert_eq!(calls.count("delete_bucket:big"), 1);
	Ok(())
}

#[tokio::test]
async fn test_buckets_failed_batch_continues_but_skips_bucket() {
	let mut fake = fake_buckets();
	fake.fail_batch_with_key.insert("k1".to_string());
	let calls = fake.calls.clone();
	let deleted = fake.deleted.clone();
	let cleaner = BucketCleaner::new(fake);

	let res = cleaner.purge(&"test-a".to_string()).await;

	assert!(matches!(res, Err(Error::BucketNotEmptied(name)) if name == "test-a"));
	// next version page and the unversioned pass still ran
	assert_eq!(calls.count("list_object_versions:test-a"), 2);
	assert_eq!(calls.count("list_objects:test-a"), 1);
	assert_eq!(deleted.lock().unwrap().len(), 2);
	assert_eq!(calls.count("delete_bucket"), 0);
}

#[tokio::test]
async fn test_buckets_rejected_key_skips_bucket() {
	let mut fake = fake_buckets();
	fake.reject_keys.insert("k4".to_string());
	let calls = fake.calls.clone();
	let cleaner = BucketCleaner::new(fake);

	assert!(!cleaner.empty_bucket("test-a").await);
	assert_eq!(calls.count("delete_bucket"), 0);
}

#[tokio::test]
async fn test_buckets_version_listing_error_stops_emptying() {
	let mut fake = fake_buckets();
	fake.fail_list_versions.insert("test-a".to_string());
	let calls = fake.calls.clone();
	let cleaner = BucketCleaner::new(fake);

	let res = cleaner.purge(&"test-a".to_string()).await;

	assert!(matches!(res, Err(Error::BucketNotEmptied(_))));
	assert_eq!(calls.all(), strings(&["list_object_versions:test-a"]));
}

#[tokio::test]
async fn test_buckets_empty_bucket_no_delete_objects_call() -> Result<()> {
	let fake = fake_buckets();
	let calls = fake.calls.clone();
	let cleaner = BucketCleaner::new(fake);

	cleaner.purge(&"test-b".to_string()).await?;

	assert_eq!(
		calls.all(),
		strings(&["list_object_versions:test-b", "list_objects:test-b", "delete_bucket:test-b"])
	);
	Ok(())
}

#[tokio::test]
async fn test_buckets_delete_bucket_error() {
	let mut fake = fake_buckets();
	fake.fail_delete_bucket.insert("test-b".to_string());
	let cleaner = BucketCleaner::new(fake);

	let err = cleaner.purge(&"test-b".to_string()).await.expect_err("should fail");

	assert!(err.to_string().starts_with("Error deleting bucket test-b:"), "{err}");
}
