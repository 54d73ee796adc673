use crate::purge::ResourceKind;
use aws_sdk_s3::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::fmt::Debug;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Generic error: {0}")]
	Generic(String),

	#[error("Invalid command. Cause: {0}")]
	CmdInvalid(&'static str),

	#[error("Missing argument '--{0}' (or its environment variable)")]
	MissingArg(&'static str),

	#[error("Error listing {}: {cause}", .kind.plural())]
	ListFailed { kind: ResourceKind, cause: Box<Error> },

	#[error("Error removing {what} from {resource}: {cause}")]
	DependentClear {
		what: &'static str,
		resource: String,
		cause: Box<Error>,
	},

	#[error("Failed to empty bucket {0}, skipping deletion")]
	BucketNotEmptied(String),

	#[error("Error deleting {resource}: {cause}")]
	DeleteFailed { resource: String, cause: Box<Error> },

	#[error("Unexpected provider response. Missing {what}")]
	Parse { what: &'static str },

	#[error("AWS Service Error. Code: {code}, Message: {message}")]
	AwsService { code: String, message: String },

	#[error("AWS SDK Error: {0}")]
	AwsSdk(String),

	#[error(transparent)]
	AwsBuild(#[from] BuildError),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

/// Constructors
impl Error {
	pub fn list_failed(kind: ResourceKind, cause: Error) -> Error {
		Error::ListFailed {
			kind,
			cause: Box::new(cause),
		}
	}

	pub fn dependent_clear(what: &'static str, resource: impl Into<String>, cause: Error) -> Error {
		Error::DependentClear {
			what,
			resource: resource.into(),
			cause: Box::new(cause),
		}
	}

	pub fn delete_failed(resource: impl Into<String>, cause: Error) -> Error {
		Error::DeleteFailed {
			resource: resource.into(),
			cause: Box::new(cause),
		}
	}

	/// Flatten any service SdkError into code/message for better CLI error reporting.
	/// Note: All the aws-sdk-* crates share the same smithy SdkError, so this works for every service.
	pub fn from_sdk<E, R>(err: SdkError<E, R>) -> Error
	where
		E: ProvideErrorMetadata + std::error::Error + 'static,
		R: Debug,
	{
		match err.code() {
			Some(code) => Error::AwsService {
				code: code.to_string(),
				message: err.message().unwrap_or_default().to_string(),
			},
			None => Error::AwsSdk(DisplayErrorContext(&err).to_string()),
		}
	}
}
