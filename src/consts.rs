//! Global constants

/// Scheduler group used when a listed schedule does not carry one.
pub const DEFAULT_SCHEDULE_GROUP: &str = "default";

/// S3 DeleteObjects accepts at most 1000 keys per request.
pub const S3_MAX_DELETE_BATCH: usize = 1000;

/// Page sizes requested from listings that only paginate when asked to.
pub const S3_LIST_BUCKETS_PAGE_SIZE: i32 = 1000;
pub const SQS_LIST_QUEUES_PAGE_SIZE: i32 = 1000;

/// Attempts (first call included) for the SDK standard retry strategy.
pub const MAX_ATTEMPTS: u32 = 5;

pub const DEFAULT_LOG_FILTER: &str = "error";

// Default AWS environment names (used as flag fallbacks)
pub const ENV_AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const ENV_AWS_ENDPOINT: &str = "AWS_ENDPOINT";
