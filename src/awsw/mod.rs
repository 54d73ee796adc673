//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules
mod cred;
mod events;
mod s3;
mod scheduler;
mod sns;
mod sqs;

// -- Re-exports
pub use self::cred::{load_sdk_config, AwsCred};
pub use self::events::EventsClient;
pub use self::s3::S3Client;
pub use self::scheduler::SchedulerClient;
pub use self::sns::SnsClient;
pub use self::sqs::SqsClient;

// endregion: --- Modules
