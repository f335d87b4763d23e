//! Groups - a Lambda function that returns a group and its child items.
//!
//! On each invocation the function queries the groups table for every item
//! stored under the requested group id, folds those items into a single
//! [`Group`](crate::core::models::Group), and replies with an API Gateway style
//! payload wrapping it.
//!
//! # Architecture
//!
//! - `storage`: the [`GroupItemFetcher`](storage::GroupItemFetcher) boundary
//!   and its `DynamoDB` implementation
//! - `builder`: pure aggregation and response mapping
//! - `api`: the invocation pipeline and the `lambda_runtime` entrypoint
//!
//! # Example
//!
//! ```no_run
//! use groups::api::{AppState, handler};
//! use groups::core::config::AppConfig;
//! use groups::storage::DynamoFetcher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     groups::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let fetcher = DynamoFetcher::from_env(&config).await;
//!     let state = AppState::new(config, fetcher);
//!
//!     lambda_runtime::run(lambda_runtime::service_fn(|event| handler(&state, event))).await
//! }
//! ```

// Module declarations
pub mod api;
pub mod builder;
pub mod core;
pub mod errors;
pub mod storage;

pub use builder::GroupResponse;
pub use crate::core::models::{Group, GroupSchema, RawItem};
pub use errors::{GroupError, MappingError, StorageError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to stdout for `CloudWatch` Logs. The level follows `RUST_LOG`
/// and defaults to `info` (`debug` with the `debug-logs` feature). Calling it
/// more than once is harmless.
///
/// # Example
///
/// ```
/// groups::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
