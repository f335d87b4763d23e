use serde_json::Value;

use crate::core::models::{Group, GroupSchema, RawItem};
use crate::errors::MappingError;

/// Folds the items of one group, in store order, into a [`Group`].
///
/// Header records (kind equal to `schema.header_kind`) contribute their
/// attributes; every other record becomes a child item. An empty slice yields
/// `Group::default()`.
///
/// # Errors
///
/// Returns a [`MappingError`] on the first item that lacks the id or kind
/// attribute, or that belongs to a different group than the first item.
pub fn aggregate(items: &[RawItem], schema: &GroupSchema) -> Result<Group, MappingError> {
    let mut group = Group::default();

    for (index, item) in items.iter().enumerate() {
        let id = required_str(item, &schema.id_attribute, index)?;
        match &group.group_id {
            None => group.group_id = Some(id.to_string()),
            Some(expected) if expected != id => {
                return Err(MappingError::MixedGroups {
                    index,
                    expected: expected.clone(),
                    found: id.to_string(),
                });
            }
            Some(_) => {}
        }

        let is_header = match &schema.kind_attribute {
            Some(kind_attribute) => required_str(item, kind_attribute, index)? == schema.header_kind,
            None => false,
        };

        if is_header {
            for (name, value) in item {
                group.attributes.insert(name.clone(), value.clone());
            }
        } else {
            group.items.push(item.clone());
        }
    }

    group.item_count = group.items.len();
    Ok(group)
}

fn required_str<'a>(item: &'a RawItem, field: &str, index: usize) -> Result<&'a str, MappingError> {
    item.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| MappingError::MissingField {
            index,
            field: field.to_string(),
        })
}
