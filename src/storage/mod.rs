//! Storage boundary: the fetcher contract and its DynamoDB implementation.

pub mod attributes;
pub mod dynamo;
pub mod fetcher;

pub use dynamo::DynamoFetcher;
pub use fetcher::GroupItemFetcher;
