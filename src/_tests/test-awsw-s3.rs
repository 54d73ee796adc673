use super::*;
use aws_sdk_s3::types::{DeleteMarkerEntry, Object, ObjectVersion};

fn version(key: &str, version_id: &str) -> ObjectVersion {
	ObjectVersion::builder().key(key).version_id(version_id).build()
}

#[test]
fn test_version_page_truncated_carries_both_markers() -> Result<()> {
	let resp = ListObjectVersionsOutput::builder()
		.versions(version("a.txt", "v1"))
		.versions(version("a.txt", "v2"))
		.delete_markers(DeleteMarkerEntry::builder().key("b.txt").version_id("m1").build())
		.is_truncated(true)
		.next_key_marker("b.txt")
		.next_version_id_marker("m1")
		.build();

	let page = to_version_page(resp)?;

	assert_eq!(
		page.versions,
		vec![
			ObjectRef::new("a.txt", Some("v1".to_string())),
			ObjectRef::new("a.txt", Some("v2".to_string()))
		]
	);
	assert_eq!(page.delete_markers, vec![ObjectRef::new("b.txt", Some("m1".to_string()))]);
	assert_eq!(
		page.next,
		Some(VersionMarker {
			key_marker: "b.txt".to_string(),
			version_id_marker: Some("m1".to_string()),
		})
	);
	Ok(())
}

#[test]
fn test_version_page_not_truncated_ignores_markers() -> Result<()> {
	let resp = ListObjectVersionsOutput::builder()
		.versions(version("a.txt", "v1"))
		.is_truncated(false)
		.next_key_marker("stale")
		.build();

	let page = to_version_page(resp)?;

	assert_eq!(page.versions.len(), 1);
	assert!(page.next.is_none());
	Ok(())
}

#[test]
fn test_version_page_truncated_without_key_marker_fails() {
	let resp = ListObjectVersionsOutput::builder()
		.versions(version("a.txt", "v1"))
		.is_truncated(true)
		.build();

	let res = to_version_page(resp);

	assert!(matches!(res, Err(Error::Parse { what: "next key marker" })));
}

#[test]
fn test_version_page_missing_key_fails() {
	let resp = ListObjectVersionsOutput::builder()
		.versions(ObjectVersion::builder().version_id("v1").build())
		.build();

	let res = to_version_page(resp);

	assert!(matches!(res, Err(Error::Parse { what: "object key" })));
}

#[test]
fn test_object_page_token_only_when_truncated() -> Result<()> {
	let truncated = ListObjectsV2Output::builder()
		.contents(Object::builder().key("a.txt").build())
		.is_truncated(true)
		.next_continuation_token("tok-1")
		.build();
	let last = ListObjectsV2Output::builder()
		.contents(Object::builder().key("b.txt").build())
		.is_truncated(false)
		.next_continuation_token("stale")
		.build();

	let page = to_object_page(truncated)?;
	assert_eq!(page.items, vec![ObjectRef::new("a.txt", None)]);
	assert_eq!(page.next_token.as_deref(), Some("tok-1"));

	let page = to_object_page(last)?;
	assert_eq!(page.items, vec![ObjectRef::new("b.txt", None)]);
	assert!(page.next_token.is_none());
	Ok(())
}
