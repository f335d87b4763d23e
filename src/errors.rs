use thiserror::Error;

/// Failures raised while querying the groups table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Event does not carry a group id")]
    MissingGroupId,

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Failed to query groups table: {0}")]
    Query(String),

    #[error("Failed to decode stored item: {0}")]
    Decode(String),
}

impl StorageError {
    /// Lets fakes and adapters raise an arbitrary storage failure verbatim.
    pub fn query(message: impl Into<String>) -> Self {
        StorageError::Query(message.into())
    }
}

/// Failures raised while folding raw items into a group.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Item {index} is missing required field `{field}`")]
    MissingField { index: usize, field: String },

    #[error("Item {index} belongs to group `{found}`, expected `{expected}`")]
    MixedGroups {
        index: usize,
        expected: String,
        found: String,
    },
}

/// The reason an invocation failed. Both variants forward the inner
/// error's message untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: environment variable not set")]
    Missing { name: &'static str },

    #[error("{name}: invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}
