use serde_json::Value;

/// Event locations searched for the group id, in priority order.
const GROUP_ID_PATHS: &[&[&str]] = &[
    &["pathParameters", "groupId"],
    &["queryStringParameters", "groupId"],
    &["groupId"],
];

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Returns the group id an invocation event asks for, if any.
///
/// Accepts API Gateway proxy events (`pathParameters` or
/// `queryStringParameters`) as well as direct invocations carrying a
/// top-level `groupId`. Blank values are ignored; others are returned
/// verbatim since surrounding whitespace is part of the stored key.
#[must_use]
pub fn group_id_from_event(event: &Value) -> Option<&str> {
    GROUP_ID_PATHS
        .iter()
        .filter_map(|path| v_str(event, path))
        .find(|id| !id.trim().is_empty())
}
