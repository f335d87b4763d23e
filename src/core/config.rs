use std::env;

use crate::core::models::GroupSchema;
use crate::errors::ConfigError;

pub const DEFAULT_ID_ATTRIBUTE: &str = "groupId";
pub const DEFAULT_KIND_ATTRIBUTE: &str = "itemType";
pub const DEFAULT_HEADER_KIND: &str = "group";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub groups_table: String,
    pub schema: GroupSchema,
    /// Reply with an error payload instead of failing the invocation.
    pub error_envelope: bool,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if `GROUPS_TABLE` is unset or a flag cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any name → value lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `GROUPS_TABLE` is missing or empty, or if
    /// `GROUPS_ERROR_ENVELOPE` is not a boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groups_table = lookup("GROUPS_TABLE")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing {
                name: "GROUPS_TABLE",
            })?;

        let id_attribute = lookup("GROUP_ID_ATTRIBUTE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ID_ATTRIBUTE.to_string());

        // An explicitly empty kind attribute turns header detection off.
        let kind_attribute = match lookup("GROUP_KIND_ATTRIBUTE") {
            Some(v) if v.is_empty() => None,
            Some(v) => Some(v),
            None => Some(DEFAULT_KIND_ATTRIBUTE.to_string()),
        };

        let header_kind = lookup("GROUP_HEADER_KIND")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HEADER_KIND.to_string());

        let error_envelope = match lookup("GROUPS_ERROR_ENVELOPE") {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "GROUPS_ERROR_ENVELOPE",
                value: raw,
            })?,
        };

        Ok(Self {
            groups_table,
            schema: GroupSchema {
                id_attribute,
                kind_attribute,
                header_kind,
            },
            error_envelope,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
