use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::config::{DEFAULT_HEADER_KIND, DEFAULT_ID_ATTRIBUTE, DEFAULT_KIND_ATTRIBUTE};

/// One record as stored for a group, attribute name to value.
pub type RawItem = Map<String, Value>;

/// Attribute names that decide how raw items fold into a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSchema {
    /// Partition attribute shared by every item of a group.
    pub id_attribute: String,
    /// Discriminant telling the header record apart from child items.
    /// `None` treats every item as a child.
    pub kind_attribute: Option<String>,
    /// Value of `kind_attribute` that marks the header record.
    pub header_kind: String,
}

impl Default for GroupSchema {
    fn default() -> Self {
        Self {
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
            kind_attribute: Some(DEFAULT_KIND_ATTRIBUTE.to_string()),
            header_kind: DEFAULT_HEADER_KIND.to_string(),
        }
    }
}

/// A group and its child items. `Group::default()` is the empty group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: Option<String>,
    pub attributes: Map<String, Value>,
    pub items: Vec<RawItem>,
    pub item_count: usize,
}

impl Group {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group_id.is_none() && self.attributes.is_empty() && self.items.is_empty()
    }
}
