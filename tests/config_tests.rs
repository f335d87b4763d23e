use std::collections::HashMap;

use groups::core::config::AppConfig;
use groups::errors::ConfigError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_defaults_with_only_table() {
    let config = AppConfig::from_lookup(lookup(&[("GROUPS_TABLE", "groups-dev")])).unwrap();

    assert_eq!(config.groups_table, "groups-dev");
    assert_eq!(config.schema.id_attribute, "groupId");
    assert_eq!(config.schema.kind_attribute.as_deref(), Some("itemType"));
    assert_eq!(config.schema.header_kind, "group");
    assert!(!config.error_envelope);
}

#[test]
fn test_missing_table_is_an_error() {
    let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Missing {
            name: "GROUPS_TABLE"
        }
    );

    let err = AppConfig::from_lookup(lookup(&[("GROUPS_TABLE", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { .. }));
}

#[test]
fn test_schema_overrides() {
    let config = AppConfig::from_lookup(lookup(&[
        ("GROUPS_TABLE", "t"),
        ("GROUP_ID_ATTRIBUTE", "pk"),
        ("GROUP_KIND_ATTRIBUTE", ""),
        ("GROUP_HEADER_KIND", "META"),
        ("GROUPS_ERROR_ENVELOPE", "TRUE"),
    ]))
    .unwrap();

    assert_eq!(config.schema.id_attribute, "pk");
    assert_eq!(config.schema.kind_attribute, None);
    assert_eq!(config.schema.header_kind, "META");
    assert!(config.error_envelope);
}

#[test]
fn test_invalid_error_envelope_flag() {
    let err = AppConfig::from_lookup(lookup(&[
        ("GROUPS_TABLE", "t"),
        ("GROUPS_ERROR_ENVELOPE", "sometimes"),
    ]))
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "GROUPS_ERROR_ENVELOPE: invalid value `sometimes`"
    );
}
