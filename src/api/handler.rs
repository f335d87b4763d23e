//! Group query Lambda handler.
//!
//! `handle_group_query` is the invocation pipeline: fetch, aggregate, map.
//! `function_handler` is the runtime-facing wrapper that reports failures and
//! translates the outcome into the Lambda reply.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::parsing;
use crate::builder::{GroupResponse, aggregate, error_response, to_response};
use crate::core::config::AppConfig;
use crate::core::models::GroupSchema;
use crate::errors::GroupError;
use crate::storage::GroupItemFetcher;

/// Process-wide state, built once at cold start and shared read-only by
/// every invocation the runtime drives.
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: Box<dyn GroupItemFetcher>,
}

impl AppState {
    pub fn new(config: AppConfig, fetcher: impl GroupItemFetcher + 'static) -> Self {
        Self {
            config,
            fetcher: Box::new(fetcher),
        }
    }
}

/// Runs one invocation to exactly one outcome.
///
/// # Errors
///
/// Returns the fetcher's [`StorageError`](crate::errors::StorageError) or the
/// aggregator's [`MappingError`](crate::errors::MappingError) unchanged. Later
/// stages never run once one has failed.
pub async fn handle_group_query<F>(
    fetcher: &F,
    schema: &GroupSchema,
    event: &Value,
) -> Result<GroupResponse, GroupError>
where
    F: GroupItemFetcher + ?Sized,
{
    let items = fetcher.fetch(event).await?;
    let group = aggregate(&items, schema)?;
    Ok(to_response(&group))
}

/// Lambda entrypoint for group queries.
///
/// # Errors
///
/// Fails the invocation with the original reason, unless the error envelope
/// is enabled, in which case the reason is returned as an error payload.
#[tracing::instrument(level = "info", skip(state, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<GroupResponse, Error> {
    let (payload, context) = event.into_parts();
    info!(
        group_id = ?parsing::group_id_from_event(&payload),
        "Getting group with event: {:?}", payload
    );

    match handle_group_query(state.fetcher.as_ref(), &state.config.schema, &payload).await {
        Ok(response) => {
            info!(status_code = response.status_code, "Group query succeeded");
            Ok(response)
        }
        Err(e) => {
            error!(
                request_id = %context.request_id,
                function_arn = %context.invoked_function_arn,
                "Group query failed: {}", e
            );
            if state.config.error_envelope {
                Ok(error_response(&e))
            } else {
                Err(Error::from(e))
            }
        }
    }
}
