use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;
use tracing::{debug, info};

use super::attributes::item_to_raw;
use super::fetcher::GroupItemFetcher;
use crate::api::parsing::group_id_from_event;
use crate::core::config::AppConfig;
use crate::core::models::RawItem;
use crate::errors::StorageError;

const KEY_CONDITION: &str = "#pk = :groupId";

/// Queries every item stored under one group partition.
///
/// Holds a cloned SDK client; cloning is cheap and the client is safe to use
/// from concurrent invocations.
#[derive(Debug, Clone)]
pub struct DynamoFetcher {
    client: DynamoClient,
    table_name: String,
    id_attribute: String,
}

impl DynamoFetcher {
    #[must_use]
    pub fn new(client: DynamoClient, config: &AppConfig) -> Self {
        Self {
            client,
            table_name: config.groups_table.clone(),
            id_attribute: config.schema.id_attribute.clone(),
        }
    }

    /// Loads the SDK configuration from the Lambda environment.
    pub async fn from_env(config: &AppConfig) -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(DynamoClient::new(&shared), config)
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn query_error<R: std::fmt::Debug>(&self, error: SdkError<QueryError, R>) -> StorageError {
        match error.as_service_error() {
            Some(service) if service.is_resource_not_found_exception() => {
                StorageError::TableNotFound(self.table_name.clone())
            }
            _ => StorageError::query(DisplayErrorContext(&error).to_string()),
        }
    }
}

#[async_trait]
impl GroupItemFetcher for DynamoFetcher {
    async fn fetch(&self, event: &Value) -> Result<Vec<RawItem>, StorageError> {
        let group_id = group_id_from_event(event).ok_or(StorageError::MissingGroupId)?;
        info!(table = %self.table_name, group_id = %group_id, "Querying group items");

        let mut items = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(KEY_CONDITION)
                .expression_attribute_names("#pk", &self.id_attribute)
                .expression_attribute_values(":groupId", AttributeValue::S(group_id.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| self.query_error(e))?;

            for item in output.items() {
                items.push(item_to_raw(item)?);
            }
            debug!(page_items = output.items().len(), "Fetched query page");

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        info!(item_count = items.len(), "Fetched group items");
        Ok(items)
    }
}
